//! Planet operations for the PlanetStore.

use log::debug;

use super::PlanetStore;
use crate::{error::Result, models::Planet};

impl PlanetStore {
    /// Persists a new planet and returns its assigned ID.
    ///
    /// Fails with `PlanetError::InvalidInput` if the planet already has an ID.
    pub async fn insert(&self, planet: &Planet) -> Result<u64> {
        let planet = planet.clone();
        let id = self
            .with_database(move |db| db.insert_planet(&planet))
            .await?;
        debug!("Inserted planet {id}");
        Ok(id)
    }

    /// Returns every stored planet. An empty store yields an empty list.
    pub async fn fetch_all(&self) -> Result<Vec<Planet>> {
        self.with_database(|db| db.list_planets()).await
    }

    /// Overwrites the stored planet with the same ID.
    ///
    /// Returns the rows affected, `0` when nothing matched.
    pub async fn update(&self, planet: &Planet) -> Result<usize> {
        let planet = planet.clone();
        let rows = self
            .with_database(move |db| db.update_planet(&planet))
            .await?;
        debug!("Updated {rows} planet row(s)");
        Ok(rows)
    }

    /// Deletes the planet with the given ID, returning the rows affected.
    pub async fn delete(&self, id: u64) -> Result<usize> {
        let rows = self.with_database(move |db| db.delete_planet(id)).await?;
        debug!("Deleted {rows} planet row(s) for ID {id}");
        Ok(rows)
    }
}
