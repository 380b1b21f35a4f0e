//! Clap adapter for the generator.
//!
//! This module is the integration layer between the framework-free core and
//! the [clap](https://docs.rs/clap) CLI parser. It is compiled only when the
//! `clap` Cargo feature is enabled (on by default), and the only bridge to
//! the core is [`Cli::into_action()`], which converts parsed arguments into a
//! [`ScaffoldAction`](crate::ScaffoldAction). If you embed the library with a
//! different argument parser (or none), construct `ScaffoldAction` values
//! directly and skip this module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scaffold::ScaffoldAction;

/// Scaffold Overwolf apps: manifest.json plus window boilerplate.
#[derive(Debug, Parser)]
#[command(name = "owgen", version)]
pub struct Cli {
    /// Project directory to generate into.
    #[arg(long, global = true, default_value = ".")]
    pub dest: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create manifest.json with app metadata and permissions, default icon
    /// assets, and a Start window.
    App,
    /// Add a window to an existing manifest.json.
    Window {
        /// Display name; normalized into the manifest window key.
        name: String,
    },
}

impl Cli {
    /// Convert clap-parsed args into a framework-agnostic `ScaffoldAction`.
    pub fn into_action(self) -> ScaffoldAction {
        let dest = self.dest;
        match self.command {
            Command::App => ScaffoldAction::InitApp { dest },
            Command::Window { name } => ScaffoldAction::InitWindow { dest, name },
        }
    }
}
