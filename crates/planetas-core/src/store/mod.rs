//! Async storage accessor for planet records.
//!
//! [`PlanetStore`] is the single entry point to persisted planets. It owns
//! exactly one SQLite connection, opened the first time any operation needs
//! it and reused for the life of the store.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Controller    │    │   PlanetStore   │    │    Database     │
//! │ (list + form)   │───▶│ (lazy, async)   │───▶│ (rusqlite, db/) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every operation awaits a `spawn_blocking` task that locks the connection,
//! so operations never overlap on it. Mutations return only an ID or a row
//! count; callers re-fetch the list themselves.
//!
//! # Usage
//!
//! ```rust,no_run
//! use planetas_core::{models::Planet, PlanetStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlanetStoreBuilder::new()
//!     .with_database_path(Some("planetas.db"))
//!     .build()?;
//!
//! let id = store.insert(&Planet::new("Mars", 1.52, 6779.0, None)).await?;
//! let planets = store.fetch_all().await?;
//! assert!(planets.iter().any(|p| p.id == Some(id)));
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use log::debug;
use tokio::{sync::OnceCell, task};

use crate::{
    db::Database,
    error::{PlanetError, Result},
};

pub mod builder;
pub mod planet_ops;


pub use builder::PlanetStoreBuilder;

/// Lazily opened, process-lifetime handle to the planet database.
pub struct PlanetStore {
    db_path: PathBuf,
    connection: OnceCell<Arc<Mutex<Database>>>,
}

impl PlanetStore {
    /// Creates a store for the given path without touching the disk.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self {
            db_path,
            connection: OnceCell::new(),
        }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Whether the connection has been opened yet.
    pub fn is_open(&self) -> bool {
        self.connection.initialized()
    }

    /// Returns the live connection, opening it on first use.
    ///
    /// Concurrent first callers share a single initialization. A failed open
    /// leaves the cell empty, so the next call tries again.
    async fn connection(&self) -> Result<Arc<Mutex<Database>>> {
        self.connection
            .get_or_try_init(|| async {
                let db_path = self.db_path.clone();
                let db = task::spawn_blocking(move || {
                    if let Some(parent) = db_path.parent() {
                        std::fs::create_dir_all(parent).map_err(|e| PlanetError::FileSystem {
                            path: parent.to_path_buf(),
                            source: e,
                        })?;
                    }
                    Database::new(&db_path)
                })
                .await
                .map_err(|e| PlanetError::Configuration {
                    message: format!("Task join error: {e}"),
                })??;

                debug!("Planet database ready at {}", self.db_path.display());
                Ok::<_, PlanetError>(Arc::new(Mutex::new(db)))
            })
            .await
            .cloned()
    }

    /// Runs `op` against the open connection on the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = self.connection().await?;

        task::spawn_blocking(move || {
            let db = db.lock().map_err(|_| PlanetError::Configuration {
                message: "Database connection lock poisoned".to_string(),
            })?;
            op(&db)
        })
        .await
        .map_err(|e| PlanetError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
