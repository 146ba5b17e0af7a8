//! Command handlers driving the planet controller.
//!
//! Each handler maps one command onto the list-and-form flow: open the form,
//! fill it from the arguments, submit, then show the notification and the
//! refreshed list. Failures are rendered first and then returned as errors so
//! the process exits non-zero.

use anyhow::{bail, Context, Result};
use log::warn;
use planetas_core::{Controller, OperationStatus, PlanetStore};

use crate::{
    args::{DeleteArgs, EditArgs, FormArgs, ListArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    controller: Controller,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlanetStore, renderer: TerminalRenderer) -> Self {
        Self {
            controller: Controller::new(store),
            renderer,
        }
    }

    /// Show the planet list, as markdown or JSON.
    pub async fn list(&mut self, args: &ListArgs) -> Result<()> {
        let list = self
            .controller
            .refresh()
            .await
            .context("Failed to load planets")?;

        if args.json {
            let json = serde_json::to_string_pretty(list.planets())
                .context("Failed to serialize planets")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&list.to_string())
        }
    }

    /// Fill a blank form and submit it.
    pub async fn add(&mut self, fields: FormArgs) -> Result<()> {
        self.controller.open_add();
        if let Some(form) = self.controller.form_mut() {
            fields.apply_to(form);
        }
        self.submit().await
    }

    /// Fill a form pre-filled from planet `id` and submit it.
    pub async fn edit(&mut self, args: EditArgs) -> Result<()> {
        self.controller
            .refresh()
            .await
            .context("Failed to load planets")?;
        self.controller
            .open_edit(args.id)
            .with_context(|| format!("Cannot edit planet {}", args.id))?;
        if let Some(form) = self.controller.form_mut() {
            args.fields.apply_to(form);
        }
        self.submit().await
    }

    /// Delete planet `id` and show the refreshed list.
    pub async fn delete(&mut self, args: &DeleteArgs) -> Result<()> {
        let status = self.controller.delete(args.id).await;
        self.renderer.render_status(&status)?;
        self.render_list()?;
        Self::status_result(&status)
    }

    async fn submit(&mut self) -> Result<()> {
        let status = self.controller.submit().await;
        if status.success {
            self.renderer.render_status(&status)?;
            self.render_list()?;
        } else {
            self.renderer.render(&self.controller.form().to_string())?;
            self.renderer.render_status(&status)?;
        }
        Self::status_result(&status)
    }

    /// Renders the list unless the refresh after a write failed.
    fn render_list(&self) -> Result<()> {
        let list = self.controller.list();
        if list.is_loading() {
            warn!("Planet list could not be reloaded after the write");
            return Ok(());
        }
        self.renderer.render(&list.to_string())
    }

    fn status_result(status: &OperationStatus) -> Result<()> {
        if status.success {
            Ok(())
        } else {
            bail!("{}", status.message)
        }
    }
}
