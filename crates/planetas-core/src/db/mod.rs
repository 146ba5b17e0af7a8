//! SQLite storage for planet records.
//!
//! [`Database`] is the synchronous layer: it owns one `rusqlite` connection,
//! creates the schema on a brand new file and maps the `planetas` table to
//! [`crate::models::Planet`]. The async, lazily opened accessor built on top of
//! it lives in [`crate::store`].

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod planet_queries;
pub mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the
    /// schema when the file is new.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening planet database at {}", path.display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
