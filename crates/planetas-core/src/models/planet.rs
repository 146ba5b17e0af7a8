//! Planet model definition.

use serde::{Deserialize, Serialize};

/// Shown in place of a missing nickname.
pub const NICKNAME_PLACEHOLDER: &str = "Sem apelido";

/// A catalogued planet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Planet {
    /// Store-assigned identifier, `None` until the planet is inserted
    pub id: Option<u64>,

    /// Name of the planet
    pub name: String,

    /// Distance from the Sun in astronomical units
    pub distance: f64,

    /// Size in kilometres
    pub size: f64,

    /// Optional nickname, never an empty string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl Planet {
    /// Builds an unsaved planet. An empty nickname becomes `None`.
    pub fn new(
        name: impl Into<String>,
        distance: f64,
        size: f64,
        nickname: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            distance,
            size,
            nickname: nickname.filter(|n| !n.is_empty()),
        }
    }

    /// Returns a copy carrying the given ID.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// The nickname, or [`NICKNAME_PLACEHOLDER`] when there is none.
    pub fn nickname_or_placeholder(&self) -> &str {
        self.nickname.as_deref().unwrap_or(NICKNAME_PLACEHOLDER)
    }

    /// Nickname as it goes to the `apelido` column.
    pub(crate) fn stored_nickname(&self) -> Option<&str> {
        self.nickname.as_deref().filter(|n| !n.is_empty())
    }
}
