//! Manifest persistence: load `manifest.json` with flow-appropriate
//! strictness, write it back pretty-printed.
//!
//! The two flows disagree on what a broken document means, so loading comes
//! in two shapes: the app initializer tolerates a missing or unparsable file
//! (both are states it can start from), while the window initializer requires
//! a parsable document and fails otherwise. Saving creates parent directories
//! as needed.

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::manifest::{MANIFEST_FILE, Manifest};

/// Location of the document within a destination directory.
pub fn manifest_path(dest: &Path) -> PathBuf {
    dest.join(MANIFEST_FILE)
}

/// What a lenient load found on disk.
#[derive(Debug)]
pub enum ExistingManifest {
    Missing,
    /// A file is present but does not parse. It still counts as "existing"
    /// for the overwrite guard; no field defaults can be recovered from it.
    Unparsable,
    Parsed(Manifest),
}

impl ExistingManifest {
    pub fn exists(&self) -> bool {
        !matches!(self, ExistingManifest::Missing)
    }

    pub fn parsed(&self) -> Option<&Manifest> {
        match self {
            ExistingManifest::Parsed(manifest) => Some(manifest),
            _ => None,
        }
    }
}

/// Load for app initialization: missing and unparsable are usable states,
/// only real I/O failures propagate.
pub fn load_lenient(path: &Path) -> Result<ExistingManifest, ScaffoldError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ExistingManifest::Missing);
        }
        Err(e) => {
            return Err(ScaffoldError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    match serde_json::from_str(&content) {
        Ok(manifest) => Ok(ExistingManifest::Parsed(manifest)),
        Err(_) => Ok(ExistingManifest::Unparsable),
    }
}

/// Load for window initialization: the document must exist and parse.
pub fn load_required(path: &Path) -> Result<Manifest, ScaffoldError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScaffoldError::ManifestMissing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(ScaffoldError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str(&content).map_err(|e| ScaffoldError::ManifestParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the document pretty-printed with a trailing newline, creating
/// parent directories if needed.
pub fn save(path: &Path, manifest: &Manifest) -> Result<(), ScaffoldError> {
    let mut json =
        serde_json::to_string_pretty(manifest).map_err(ScaffoldError::ManifestSerialize)?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, json).map_err(|e| ScaffoldError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}
