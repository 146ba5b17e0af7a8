//! Display of the add/edit form.

use std::fmt;

use super::Inline;
use crate::controller::{
    form::{DISTANCE_LABEL, NAME_LABEL, NICKNAME_LABEL, SIZE_LABEL},
    FormState, PlanetForm,
};

impl fmt::Display for PlanetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title())?;
        writeln!(f)?;
        writeln!(f, "- {NAME_LABEL}: {}", Inline(&self.name))?;
        writeln!(f, "- {DISTANCE_LABEL}: {}", Inline(&self.distance))?;
        writeln!(f, "- {SIZE_LABEL}: {}", Inline(&self.size))?;
        writeln!(f, "- {NICKNAME_LABEL}: {}", Inline(&self.nickname))
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => Ok(()),
            Self::Open { form, error } => {
                write!(f, "{form}")?;
                if let Some(error) = error {
                    writeln!(f)?;
                    writeln!(f, "**{error}**")?;
                }
                Ok(())
            }
        }
    }
}
