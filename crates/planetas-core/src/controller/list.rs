//! State of the planet list screen.

use std::sync::Arc;

use crate::models::Planet;

/// What the list screen currently shows.
///
/// Refreshing replaces the whole value; a cloned snapshot keeps the planets
/// it was taken with.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    /// No fetch has completed yet
    #[default]
    Loading,
    /// The last fetch returned no planets
    Empty,
    /// The planets from the last fetch, in storage order
    Loaded(Arc<[Planet]>),
}

impl ListState {
    /// Builds the state for a freshly fetched list.
    pub fn from_planets(planets: Vec<Planet>) -> Self {
        if planets.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(planets.into())
        }
    }

    /// Planets currently displayed, empty while loading.
    pub fn planets(&self) -> &[Planet] {
        match self {
            Self::Loaded(planets) => &planets[..],
            Self::Loading | Self::Empty => &[],
        }
    }

    /// Finds a displayed planet by ID.
    pub fn find(&self, id: u64) -> Option<&Planet> {
        self.planets().iter().find(|p| p.id == Some(id))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
