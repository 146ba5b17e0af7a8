//! Builder for creating and configuring PlanetStore instances.

use std::path::{Path, PathBuf};

use super::PlanetStore;
use crate::error::{PlanetError, Result};

/// File name of the planet database.
pub const DATABASE_FILE_NAME: &str = "planetas.db";

/// Builder for creating and configuring PlanetStore instances.
#[derive(Debug, Clone)]
pub struct PlanetStoreBuilder {
    database_path: Option<PathBuf>,
}

impl PlanetStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/planetas/planetas.db` or
    /// `~/.local/share/planetas/planetas.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store. The database file is not opened until first use;
    /// resolving the XDG default creates its parent directory.
    ///
    /// # Errors
    ///
    /// Returns `PlanetError::XdgDirectory` if no default path can be resolved
    pub fn build(self) -> Result<PlanetStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        Ok(PlanetStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("planetas")
            .place_data_file(DATABASE_FILE_NAME)
            .map_err(|e| PlanetError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlanetStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
