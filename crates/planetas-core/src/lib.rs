//! Core library for the Planetas catalogue.
//!
//! This crate stores planet records (name, distance from the Sun, size and an
//! optional nickname) in a single-file SQLite database and provides the
//! list-and-form controller that the command-line interface drives.
//!
//! - [`db`]: synchronous SQLite access and one-time schema creation
//! - [`store`]: the async [`PlanetStore`], opened lazily on first use
//! - [`controller`]: list state, the add/edit form and its validation gate
//! - [`display`]: markdown output for all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use planetas_core::{Controller, PlanetStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlanetStoreBuilder::new()
//!     .with_database_path(Some("planetas.db"))
//!     .build()?;
//! let mut controller = Controller::new(store);
//!
//! controller.open_add();
//! if let Some(form) = controller.form_mut() {
//!     form.name = "Mars".to_string();
//!     form.distance = "1.52".to_string();
//!     form.size = "6779".to_string();
//! }
//! let status = controller.submit().await;
//! println!("{status}");
//! println!("{}", controller.list());
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use controller::{Controller, FormMode, FormState, ListState, PlanetForm};
pub use db::Database;
pub use display::OperationStatus;
pub use error::{PlanetError, Result};
pub use models::Planet;
pub use store::{PlanetStore, PlanetStoreBuilder};
