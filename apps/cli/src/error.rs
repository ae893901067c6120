//! Error handling for the command-line application

use std::path::PathBuf;
use thiserror::Error;

use mcq_core::McqError;

/// Application error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] McqError),

    #[error("Invalid set count: {0:?} (expected a positive whole number)")]
    InvalidSetCount(String),

    #[error("Invalid output format: {0}")]
    InvalidFormat(String),

    #[error("Input closed while waiting for: {0}")]
    InputClosed(String),

    #[error("Cannot ask \"{0}\" in non-interactive mode")]
    PromptDisabled(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, CliError>;
