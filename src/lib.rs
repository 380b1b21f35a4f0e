//! Interactive scaffolding for Overwolf apps: answer a handful of prompts,
//! get a `manifest.json` and working window boilerplate.
//!
//! ```text
//! owgen app              # create the manifest, assets, and a Start window
//! owgen window Settings  # add another window to an existing manifest
//! ```
//!
//! # What the generator produces
//!
//! `owgen app` collects app metadata (name, author, version, description,
//! dock-button title, minimum platform version) and an optional permission
//! list, then writes a `manifest.json` with the platform's creation defaults,
//! placeholder icon assets under `assets/img/`, and finally composes with the
//! window flow to scaffold the default `Start` window.
//!
//! `owgen window <name>` adds one window to an existing manifest. The display
//! name is normalized into a stable window key (`"my window"` → `"MyWindow"`);
//! the window's behavior flags are derived from a chosen preset (`app`,
//! `overlay`, `stream-only`, `browser-window`) and a set of option toggles,
//! and its markup/script/style files are generated under
//! `windows/<camelKey>/`, next to a shared script/style pair written once per
//! project.
//!
//! # Overwrite safety
//!
//! Both flows guard against silent loss: if the manifest (app flow) or the
//! target window key (window flow) already exists, the run asks for
//! confirmation first and declining aborts the whole run with disk state
//! untouched. When overwriting an existing manifest, its current values
//! become the prompt defaults.
//!
//! # Structure
//!
//! The core is framework-free: [`ScaffoldAction`] describes a run,
//! [`run`] executes it against any [`Prompter`], and every
//! derivation step (metadata, window decision table, key normalization) is a
//! pure function with the I/O kept at the edges. The `cli` module (behind the
//! `clap` Cargo feature, on by default) contributes the derive-based argument
//! parser the `owgen` binary uses; the library works without it.

pub mod error;
pub mod manifest;

#[cfg(feature = "clap")]
mod cli;
mod meta;
mod naming;
mod persist;
mod prompt;
mod questions;
mod scaffold;
mod templates;
mod window;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{Cli, Command};
pub use error::ScaffoldError;
pub use manifest::{Manifest, Meta, Permission, WindowConfig};
pub use prompt::{Answers, Prompter, Question, QuestionKind, TerminalPrompter};
pub use scaffold::{ScaffoldAction, ScaffoldOutcome, init_app, init_window, run};
pub use window::{Preset, WindowOption};
