//! Error types for connect-core

use std::path::PathBuf;

/// Result type for connect-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Directory {} not found", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Reasons a single connector candidate cannot be submitted.
///
/// These never abort a run; the reconciler counts them as failed records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Connector is not a mapping (found {found})")]
    NotAMapping { found: &'static str },

    #[error("Connector missing 'name' field")]
    MissingName,

    #[error("Connector 'name' must be a string (found {found})")]
    InvalidName { found: &'static str },

    #[error("Connector '{name}' has a 'config' that is not a mapping (found {found})")]
    InvalidConfig { name: String, found: &'static str },

    #[error("Failed to serialize payload for connector '{name}': {message}")]
    Payload { name: String, message: String },
}
