//! Command-line arguments.
//!
//! Form fields are taken as raw text so that malformed numbers reach the
//! form's validation gate instead of being rejected by clap.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use planetas_core::PlanetForm;

/// Planet catalogue backed by a local SQLite database
///
/// Lists, adds, edits and deletes planets. Without a subcommand the planet
/// list is shown.
#[derive(Parser)]
#[command(version, about, name = "planetas")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/planetas/planetas.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all planets
    #[command(alias = "ls")]
    List(ListArgs),
    /// Add a planet
    #[command(alias = "a")]
    Add(FormArgs),
    /// Edit a planet, starting from its stored values
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Delete a planet
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(ClapArgs, Default)]
pub struct ListArgs {
    /// Print the planets as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Form inputs. Omitted fields keep the form's current value.
#[derive(ClapArgs, Default)]
pub struct FormArgs {
    #[arg(short, long, help = "Nome do Planeta")]
    pub name: Option<String>,
    #[arg(short, long, allow_hyphen_values = true, help = "Distância do Sol (UA)")]
    pub distance: Option<String>,
    #[arg(short, long, allow_hyphen_values = true, help = "Tamanho (km)")]
    pub size: Option<String>,
    #[arg(
        short = 'k',
        long,
        help = "Apelido (Opcional); pass an empty string to clear it"
    )]
    pub nickname: Option<String>,
}

impl FormArgs {
    /// Writes the given fields into the open form.
    pub fn apply_to(self, form: &mut PlanetForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(distance) = self.distance {
            form.distance = distance;
        }
        if let Some(size) = self.size {
            form.size = size;
        }
        if let Some(nickname) = self.nickname {
            form.nickname = nickname;
        }
    }
}

#[derive(ClapArgs)]
pub struct EditArgs {
    #[arg(help = "ID of the planet to edit")]
    pub id: u64,
    #[command(flatten)]
    pub fields: FormArgs,
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    #[arg(help = "ID of the planet to delete")]
    pub id: u64,
}
