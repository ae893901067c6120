//! Error types for mcq-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using McqError.
pub type Result<T> = std::result::Result<T, McqError>;

/// Errors that can occur while loading source files.
#[derive(Debug, Error)]
pub enum McqError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl McqError {
    /// Wrap an I/O error, mapping `NotFound` to [`McqError::FileNotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
