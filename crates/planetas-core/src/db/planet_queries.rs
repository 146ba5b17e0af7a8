//! Planet CRUD queries.

use rusqlite::{params, Row};

use crate::{
    error::{DatabaseResultExt, PlanetError, Result},
    models::Planet,
};

const INSERT_PLANET_SQL: &str =
    "INSERT INTO planetas (nome, distancia, tamanho, apelido) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PLANETS_SQL: &str = "SELECT id, nome, distancia, tamanho, apelido FROM planetas";
const UPDATE_PLANET_SQL: &str =
    "UPDATE planetas SET nome = ?1, distancia = ?2, tamanho = ?3, apelido = ?4 WHERE id = ?5";
const DELETE_PLANET_SQL: &str = "DELETE FROM planetas WHERE id = ?1";

impl super::Database {
    /// Inserts a new planet and returns its assigned ID.
    ///
    /// The record must not carry an ID yet. Field values are stored as given;
    /// range checks happen in the form before anything reaches this layer.
    pub fn insert_planet(&self, planet: &Planet) -> Result<u64> {
        if let Some(id) = planet.id {
            return Err(PlanetError::invalid_input("id")
                .with_reason(format!("planet already has ID {id}; use update instead")));
        }

        self.connection
            .execute(
                INSERT_PLANET_SQL,
                params![
                    planet.name,
                    planet.distance,
                    planet.size,
                    planet.stored_nickname()
                ],
            )
            .db_context("Failed to insert planet")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Returns every stored planet in natural storage order.
    pub fn list_planets(&self) -> Result<Vec<Planet>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANETS_SQL)
            .db_context("Failed to prepare query")?;

        let planets = stmt
            .query_map([], planet_from_row)
            .db_context("Failed to query planets")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read planet row")?;

        Ok(planets)
    }

    /// Overwrites every field of the row matching `planet.id`.
    ///
    /// Returns the number of rows affected: `0` when no row has that ID.
    pub fn update_planet(&self, planet: &Planet) -> Result<usize> {
        let id = planet.id.ok_or_else(|| {
            PlanetError::invalid_input("id").with_reason("cannot update a planet without an ID")
        })?;
        let id = row_id(id)?;

        self.connection
            .execute(
                UPDATE_PLANET_SQL,
                params![
                    planet.name,
                    planet.distance,
                    planet.size,
                    planet.stored_nickname(),
                    id
                ],
            )
            .db_context("Failed to update planet")
    }

    /// Removes the planet with the given ID, returning the rows affected.
    pub fn delete_planet(&self, id: u64) -> Result<usize> {
        let id = row_id(id)?;
        self.connection
            .execute(DELETE_PLANET_SQL, params![id])
            .db_context("Failed to delete planet")
    }
}

/// SQLite rowids are signed; IDs past `i64::MAX` can never match a row.
fn row_id(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|_| {
        PlanetError::invalid_input("id").with_reason(format!("ID {id} is out of range"))
    })
}

fn planet_from_row(row: &Row<'_>) -> rusqlite::Result<Planet> {
    Ok(Planet {
        id: Some(row.get::<_, i64>(0)? as u64),
        name: row.get(1)?,
        distance: row.get(2)?,
        size: row.get(3)?,
        nickname: row.get(4)?,
    })
}
