//! The add/edit form and its validation gate.

use crate::{
    error::{PlanetError, Result},
    models::Planet,
};

pub const NAME_LABEL: &str = "Nome do Planeta";
pub const DISTANCE_LABEL: &str = "Distância do Sol (UA)";
pub const SIZE_LABEL: &str = "Tamanho (km)";
pub const NICKNAME_LABEL: &str = "Apelido (Opcional)";

/// Whether the form creates a new planet or overwrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: u64 },
}

/// Raw text inputs of the planet form.
///
/// Values stay as typed until [`PlanetForm::validate`] turns them into a
/// [`Planet`], so bad numbers are caught by the gate rather than earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetForm {
    mode: FormMode,
    pub name: String,
    pub distance: String,
    pub size: String,
    pub nickname: String,
}

impl PlanetForm {
    /// An empty form for adding a planet.
    pub fn blank() -> Self {
        Self {
            mode: FormMode::Add,
            name: String::new(),
            distance: String::new(),
            size: String::new(),
            nickname: String::new(),
        }
    }

    /// A form pre-filled from an existing planet.
    ///
    /// A planet without an ID has nothing to overwrite, so it opens in
    /// [`FormMode::Add`].
    pub fn prefilled(planet: &Planet) -> Self {
        Self {
            mode: planet
                .id
                .map_or(FormMode::Add, |id| FormMode::Edit { id }),
            name: planet.name.clone(),
            distance: planet.distance.to_string(),
            size: planet.size.to_string(),
            nickname: planet.nickname.clone().unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Dialog title for the current mode.
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Adicionar Planeta",
            FormMode::Edit { .. } => "Editar Planeta",
        }
    }

    /// Label of the confirm action for the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Adicionar",
            FormMode::Edit { .. } => "Salvar",
        }
    }

    /// Checks the inputs and builds the planet to persist.
    ///
    /// Rejects an empty name, a distance or size that does not parse as a
    /// finite number, and any distance or size `<= 0`. An empty nickname
    /// becomes `None`. In edit mode the original ID is carried over.
    pub fn validate(&self) -> Result<Planet> {
        if self.name.is_empty() {
            return Err(PlanetError::invalid_input("name").with_reason("must not be empty"));
        }
        let distance = parse_positive("distance", &self.distance)?;
        let size = parse_positive("size", &self.size)?;

        let planet = Planet::new(
            self.name.clone(),
            distance,
            size,
            Some(self.nickname.clone()),
        );
        Ok(match self.mode {
            FormMode::Add => planet,
            FormMode::Edit { id } => planet.with_id(id),
        })
    }
}

fn parse_positive(field: &str, input: &str) -> Result<f64> {
    let value: f64 = input.trim().parse().map_err(|_| {
        PlanetError::invalid_input(field).with_reason(format!("'{input}' is not a number"))
    })?;

    if !value.is_finite() {
        return Err(PlanetError::invalid_input(field).with_reason("must be a finite number"));
    }
    if value <= 0.0 {
        return Err(PlanetError::invalid_input(field).with_reason("must be greater than zero"));
    }
    Ok(value)
}
