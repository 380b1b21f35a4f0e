//! The two generation pipelines and their shared write phase.
//!
//! Both flows are strictly sequential: load, overwrite guard, prompt,
//! derive, write. The manifest value is threaded through the phases
//! explicitly; a declined overwrite guard returns an aborted outcome before
//! any prompting or writing happens, so the rest of the run is a no-op and
//! disk state is untouched. Writes are not transactional: the document is
//! saved before the window template files, and a failure in between leaves
//! partially-applied state for the next run to overwrite.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::manifest::{ICON_GRAY_PATH, ICON_PATH, MANIFEST_FILE, Manifest, START_WINDOW};
use crate::meta::derive_meta;
use crate::naming;
use crate::persist;
use crate::prompt::{Prompter, run_schema};
use crate::questions;
use crate::templates;
use crate::window::derive_window;

/// Directory that holds all generated window files, relative to the
/// destination root.
const WINDOWS_DIR: &str = "windows";

const SHARED_JS: &str = "shared.js";
const SHARED_CSS: &str = "shared.css";

/// A generation request, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldAction {
    /// Create (or overwrite) the manifest, then scaffold the Start window.
    InitApp { dest: PathBuf },
    /// Add one window to an existing manifest.
    InitWindow { dest: PathBuf, name: String },
}

/// What a run did. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldOutcome {
    /// The user declined an overwrite confirmation; nothing was written.
    Aborted { reason: String },
    AppInitialized {
        manifest: PathBuf,
        start_window: Box<ScaffoldOutcome>,
    },
    WindowAdded { key: String, files: Vec<PathBuf> },
}

impl fmt::Display for ScaffoldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldOutcome::Aborted { reason } => {
                write!(f, "Aborted: {reason}. Nothing was written.")
            }
            ScaffoldOutcome::AppInitialized {
                manifest,
                start_window,
            } => {
                writeln!(f, "Wrote {}", manifest.display())?;
                write!(f, "{start_window}")
            }
            ScaffoldOutcome::WindowAdded { key, files } => {
                write!(f, "Added window \"{key}\" to {MANIFEST_FILE}")?;
                for file in files {
                    write!(f, "\n  {}", file.display())?;
                }
                Ok(())
            }
        }
    }
}

/// Run one generation pass.
pub fn run(
    action: &ScaffoldAction,
    prompter: &mut dyn Prompter,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    match action {
        ScaffoldAction::InitApp { dest } => init_app(dest, prompter),
        ScaffoldAction::InitWindow { dest, name } => init_window(dest, name, prompter),
    }
}

/// The app initializer: build a fresh document from prompted metadata and
/// permissions, write it together with the default assets, then compose with
/// the window initializer for the Start window.
pub fn init_app(
    dest: &Path,
    prompter: &mut dyn Prompter,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    let path = persist::manifest_path(dest);
    let existing = persist::load_lenient(&path)?;

    if existing.exists() {
        let proceed = prompter.confirm(
            "A manifest.json already exists, are you sure you want to continue?",
            false,
        )?;
        if !proceed {
            return Ok(ScaffoldOutcome::Aborted {
                reason: format!("{MANIFEST_FILE} already exists"),
            });
        }
    }

    let schema = questions::app_questions(existing.parsed().map(|m| &m.meta));
    let answers = run_schema(&schema, prompter)?;

    let meta = derive_meta(&questions::meta_answers(&answers));
    let permissions = crate::meta::derive_permissions(questions::permission_answers(&answers));
    let manifest = Manifest::new(meta, permissions);

    write_icon_assets(dest)?;
    persist::save(&path, &manifest)?;

    let start_window = init_window(dest, START_WINDOW, prompter)?;
    Ok(ScaffoldOutcome::AppInitialized {
        manifest: path,
        start_window: Box::new(start_window),
    })
}

/// The window initializer: derive one window record from prompted answers,
/// merge it into the existing document under its normalized key, and write
/// the window's template files.
pub fn init_window(
    dest: &Path,
    display_name: &str,
    prompter: &mut dyn Prompter,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    let path = persist::manifest_path(dest);
    let mut manifest = persist::load_required(&path)?;

    let key = naming::window_key(display_name);
    if manifest.data.windows.contains_key(&key) {
        let proceed = prompter.confirm(
            &format!(
                "A window named \"{key}\" already exists in {MANIFEST_FILE}. Are you sure you want to continue?"
            ),
            false,
        )?;
        if !proceed {
            return Ok(ScaffoldOutcome::Aborted {
                reason: format!("window \"{key}\" already exists"),
            });
        }
    }

    let schema = questions::window_questions();
    let answers = run_schema(&schema, prompter)?;
    let config = derive_window(&key, &questions::window_answers(&answers));

    manifest.data.windows.insert(key.clone(), config);
    persist::save(&path, &manifest)?;
    let files = write_window_files(dest, &key)?;

    Ok(ScaffoldOutcome::WindowAdded { key, files })
}

/// Placeholder icon artwork referenced by the derived meta section.
fn write_icon_assets(dest: &Path) -> Result<(), ScaffoldError> {
    write_file(&dest.join(ICON_PATH), templates::icon_placeholder())?;
    write_file(&dest.join(ICON_GRAY_PATH), templates::icon_placeholder())?;
    Ok(())
}

/// One directory per window with its markup/script/style, plus the shared
/// script/style pair created once per project and never overwritten.
fn write_window_files(dest: &Path, key: &str) -> Result<Vec<PathBuf>, ScaffoldError> {
    let stem = naming::camel_stem(key);
    let windows_root = dest.join(WINDOWS_DIR);
    let window_dir = windows_root.join(&stem);

    let script = format!("{stem}.js");
    let style = format!("{stem}.css");

    let mut written = Vec::new();

    let html_path = window_dir.join(format!("{key}.html"));
    write_file(
        &html_path,
        templates::window_html(key, &script, &style).as_bytes(),
    )?;
    written.push(html_path);

    let script_path = window_dir.join(script);
    write_file(&script_path, templates::window_js().as_bytes())?;
    written.push(script_path);

    let style_path = window_dir.join(style);
    write_file(&style_path, templates::window_css().as_bytes())?;
    written.push(style_path);

    for (name, body) in [(SHARED_JS, templates::shared_js()), (SHARED_CSS, templates::shared_css())]
    {
        let path = windows_root.join(name);
        if write_file_unless_exists(&path, body.as_bytes())? {
            written.push(path);
        }
    }

    Ok(written)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ScaffoldError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, contents).map_err(|e| ScaffoldError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns whether the file was written.
fn write_file_unless_exists(path: &Path, contents: &[u8]) -> Result<bool, ScaffoldError> {
    if path.exists() {
        return Ok(false);
    }
    write_file(path, contents)?;
    Ok(true)
}
