//! Error types for connect-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a CLI run with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from connect-core
    #[error(transparent)]
    Core(#[from] connect_core::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
