//! Display implementation for [`Planet`].

use std::fmt;

use super::Inline;
use crate::models::Planet;

impl fmt::Display for Planet {
    /// One list row: the name as a heading, the nickname (or placeholder)
    /// underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Inline(&self.name);
        match self.id {
            Some(id) => writeln!(f, "## {id}. {name}")?,
            None => writeln!(f, "## {name}")?,
        }
        writeln!(f)?;
        writeln!(f, "{}", Inline(self.nickname_or_placeholder()))?;
        writeln!(f)
    }
}
