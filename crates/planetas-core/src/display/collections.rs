//! Display of the planet list screen.

use std::fmt;

use crate::controller::ListState;

/// Heading of the list screen.
pub const LIST_TITLE: &str = "Gerenciador de Planetas";
/// Shown while the first fetch is pending.
pub const LOADING_MESSAGE: &str = "Carregando planetas...";
/// Shown when the store holds no planets.
pub const EMPTY_LIST_MESSAGE: &str = "Nenhum planeta cadastrado";

impl fmt::Display for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {LIST_TITLE}")?;
        writeln!(f)?;
        match self {
            Self::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            Self::Empty => writeln!(f, "{EMPTY_LIST_MESSAGE}"),
            Self::Loaded(planets) => {
                for planet in &planets[..] {
                    write!(f, "{planet}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Planet;

    #[test]
    fn test_list_states_display() {
        let loading = format!("{}", ListState::Loading);
        assert!(loading.contains(LOADING_MESSAGE));

        let empty = format!("{}", ListState::Empty);
        assert_eq!(empty, format!("# {LIST_TITLE}\n\n{EMPTY_LIST_MESSAGE}\n"));
    }

    #[test]
    fn test_loaded_list_shows_every_row() {
        let state = ListState::from_planets(vec![
            Planet::new("Mars", 1.52, 6779.0, None).with_id(1),
            Planet::new("Earth", 1.0, 12742.0, Some("Terra".to_string())).with_id(2),
        ]);
        let output = format!("{state}");

        assert!(output.contains("## 1. Mars"));
        assert!(output.contains("Sem apelido"));
        assert!(output.contains("## 2. Earth"));
        assert!(output.contains("Terra"));
        assert!(!output.contains(EMPTY_LIST_MESSAGE));
        assert!(output.find("Mars") < output.find("Earth"));
    }
}
