//! Planetas CLI Application
//!
//! Command-line interface for the planet catalogue.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, ListArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use planetas_core::PlanetStoreBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlanetStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to configure planet store")?;

    info!(
        "Planetas started with database {}",
        store.database_path().display()
    );

    let mut cli = Cli::new(store, TerminalRenderer::new(!no_color));

    match command {
        Some(List(args)) => cli.list(&args).await,
        Some(Add(fields)) => cli.add(fields).await,
        Some(Edit(args)) => cli.edit(args).await,
        Some(Delete(args)) => cli.delete(&args).await,
        None => cli.list(&ListArgs::default()).await,
    }
}
