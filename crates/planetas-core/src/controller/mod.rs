//! List-and-form controller on top of [`PlanetStore`].
//!
//! The controller holds what the screen shows ([`ListState`]) and the dialog
//! ([`FormState`]), and sequences store calls:
//!
//! ```text
//! Closed ──open_add/open_edit──▶ Open(form, error: None)
//!   ▲                               │ submit
//!   │ success                       ▼
//!   └──────────────────── validate ─┬─ invalid ──▶ Open(form, error: Some)
//!                                   └─ insert/update ─ failure ──▶ Open(form, error: None)
//! ```
//!
//! Mutations never hand back the list. After a successful submit, and after
//! every delete, the controller issues a full [`PlanetStore::fetch_all`] and
//! swaps in the new [`ListState`]. If that fetch fails the list drops back
//! to [`ListState::Loading`] instead of showing rows the write just changed.
//!
//! Storage errors and "no rows affected" produce the same failure
//! notification; the error itself only reaches the log.

use log::{debug, warn};

use crate::{
    display::OperationStatus,
    error::{PlanetError, Result},
    store::PlanetStore,
};

pub mod form;
pub mod list;


pub use form::{FormMode, PlanetForm};
pub use list::ListState;

pub const VALIDATION_FAILED: &str = "Preencha os campos corretamente";
pub const INSERT_SUCCEEDED: &str = "Planeta adicionado com sucesso!";
pub const INSERT_FAILED: &str = "Falha ao adicionar planeta.";
pub const UPDATE_SUCCEEDED: &str = "Planeta atualizado com sucesso!";
pub const UPDATE_FAILED: &str = "Falha ao atualizar planeta.";
pub const DELETE_SUCCEEDED: &str = "Planeta excluído com sucesso!";
pub const DELETE_FAILED: &str = "Falha ao excluir planeta.";
pub const NO_OPEN_FORM: &str = "Nenhum formulário aberto.";

/// State of the add/edit dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    Open {
        form: PlanetForm,
        /// Inline message left by the last rejected submit
        error: Option<String>,
    },
}

/// Drives the list screen and the planet form.
pub struct Controller {
    store: PlanetStore,
    list: ListState,
    form: FormState,
}

impl Controller {
    /// Creates a controller in the loading state with the form closed.
    pub fn new(store: PlanetStore) -> Self {
        Self {
            store,
            list: ListState::Loading,
            form: FormState::Closed,
        }
    }

    pub fn store(&self) -> &PlanetStore {
        &self.store
    }

    /// What the list screen currently shows.
    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The open form, if any, for editing its inputs.
    pub fn form_mut(&mut self) -> Option<&mut PlanetForm> {
        match &mut self.form {
            FormState::Open { form, .. } => Some(form),
            FormState::Closed => None,
        }
    }

    /// Re-fetches every planet and replaces the list.
    ///
    /// On failure the previous list is kept.
    pub async fn refresh(&mut self) -> Result<&ListState> {
        let planets = self.store.fetch_all().await.map_err(|e| {
            warn!("Failed to refresh planet list: {e}");
            e
        })?;
        self.list = ListState::from_planets(planets);
        Ok(&self.list)
    }

    /// Opens a blank form.
    pub fn open_add(&mut self) {
        self.open(PlanetForm::blank());
    }

    /// Opens the form pre-filled with the listed planet `id`.
    pub fn open_edit(&mut self, id: u64) -> Result<()> {
        let form = self
            .list
            .find(id)
            .map(PlanetForm::prefilled)
            .ok_or_else(|| {
                PlanetError::invalid_input("id").with_reason(format!("no planet with ID {id}"))
            })?;
        self.open(form);
        Ok(())
    }

    /// Closes the form without saving.
    pub fn cancel(&mut self) {
        self.form = FormState::Closed;
    }

    /// Validates and saves the open form.
    ///
    /// Invalid input leaves the form open with an inline error and never
    /// reaches the store. On success the form closes and the list is
    /// refreshed; on failure the form stays open.
    pub async fn submit(&mut self) -> OperationStatus {
        let form = match &self.form {
            FormState::Open { form, .. } => form.clone(),
            FormState::Closed => return OperationStatus::failure(NO_OPEN_FORM.to_string()),
        };

        let planet = match form.validate() {
            Ok(planet) => planet,
            Err(_) => {
                self.set_form_error(Some(VALIDATION_FAILED.to_string()));
                return OperationStatus::failure(VALIDATION_FAILED.to_string());
            }
        };

        let (success, message) = match form.mode() {
            FormMode::Add => {
                let ok = report(self.store.insert(&planet).await.map(|_| true));
                (ok, if ok { INSERT_SUCCEEDED } else { INSERT_FAILED })
            }
            FormMode::Edit { .. } => {
                let ok = report(self.store.update(&planet).await.map(|rows| rows > 0));
                (ok, if ok { UPDATE_SUCCEEDED } else { UPDATE_FAILED })
            }
        };

        if success {
            self.form = FormState::Closed;
            self.refresh_after_write().await;
            OperationStatus::success(message.to_string())
        } else {
            self.set_form_error(None);
            OperationStatus::failure(message.to_string())
        }
    }

    /// Deletes planet `id`, then refreshes the list whatever the outcome.
    pub async fn delete(&mut self, id: u64) -> OperationStatus {
        let success = report(self.store.delete(id).await.map(|rows| rows > 0));
        self.refresh_after_write().await;

        if success {
            OperationStatus::success(DELETE_SUCCEEDED.to_string())
        } else {
            OperationStatus::failure(DELETE_FAILED.to_string())
        }
    }

    async fn refresh_after_write(&mut self) {
        if let Err(e) = self.refresh().await {
            debug!("Discarding stale planet list after failed refresh: {e}");
            self.list = ListState::Loading;
        }
    }

    fn open(&mut self, form: PlanetForm) {
        self.form = FormState::Open { form, error: None };
    }

    fn set_form_error(&mut self, message: Option<String>) {
        if let FormState::Open { error, .. } = &mut self.form {
            *error = message;
        }
    }
}

/// Collapses a storage result into the success flag, logging errors.
fn report(result: Result<bool>) -> bool {
    result.unwrap_or_else(|e| {
        warn!("Planet storage operation failed: {e}");
        false
    })
}
