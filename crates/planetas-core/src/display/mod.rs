//! Markdown formatting for planets, the list screen and the form.
//!
//! Domain types implement [`std::fmt::Display`] directly; the CLI renders the
//! resulting markdown through its terminal renderer.
//!
//! - [`models`]: a planet as one list row (name, then nickname)
//! - [`collections`]: the list screen for each [`crate::controller::ListState`]
//! - [`form`]: the add/edit dialog with its inline error
//! - [`status`]: success/failure notifications ([`OperationStatus`])
//!
//! ```rust
//! use planetas_core::{controller::ListState, display::OperationStatus};
//!
//! let empty = format!("{}", ListState::Empty);
//! assert!(empty.contains("Nenhum planeta cadastrado"));
//!
//! let done = OperationStatus::success("Planeta adicionado com sucesso!".to_string());
//! assert!(format!("{done}").contains("adicionado"));
//! ```

pub mod collections;
pub mod form;
pub mod models;
pub mod status;

pub use collections::{EMPTY_LIST_MESSAGE, LIST_TITLE, LOADING_MESSAGE};
pub use status::OperationStatus;

use std::fmt::{self, Write};

/// User text placed inside a markdown line.
///
/// Line breaks become spaces so a value stays on its own row, and markdown
/// markers are backslash-escaped so they print literally.
pub(crate) struct Inline<'a>(&'a str);

impl fmt::Display for Inline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\r' | '\n' => f.write_char(' ')?,
                '\\' | '*' | '_' | '`' | '~' | '#' | '[' | ']' | '|' | '>' => {
                    f.write_char('\\')?;
                    f.write_char(c)?;
                }
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
