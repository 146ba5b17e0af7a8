//! One-time schema creation.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Schema version written by `assets/schema.sql`.
pub const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Creates the `planetas` table the first time a file is opened.
    ///
    /// A file whose `user_version` already reached [`SCHEMA_VERSION`] is left
    /// untouched. Openers within one process are serialized by the store.
    /// Nothing coordinates separate processes: without a busy timeout, a
    /// second process opening a fresh file mid-transaction gets
    /// `SQLITE_BUSY`.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        let version = self.schema_version()?;
        if version >= SCHEMA_VERSION {
            return Ok(());
        }

        debug!("Creating planet schema (user_version {version} -> {SCHEMA_VERSION})");
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        tx.execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        tx.commit().db_context("Failed to commit schema")?;
        Ok(())
    }

    /// Reads `PRAGMA user_version` from the open file.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}
