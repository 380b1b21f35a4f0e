use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No manifest.json found at {path} — run `owgen app` first or create one manually")]
    ManifestMissing { path: PathBuf },

    #[error("Failed to serialize manifest: {0}")]
    ManifestSerialize(#[source] serde_json::Error),

    #[error("Failed to read prompt input: {0}")]
    PromptIo(#[source] std::io::Error),

    #[error("Scripted prompter ran out of answers at question '{0}'")]
    AnswersExhausted(String),
}
