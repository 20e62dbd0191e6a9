//! Error types for connect-content

use crate::format::Format;

/// Result type for connect-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing connector content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: Format, message: String },

    /// Every parser in the chain rejected the content.
    #[error("Content matched no supported format: {}", join_attempts(.attempts))]
    NoFormatMatched { attempts: Vec<Error> },
}

impl Error {
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        Self::ParseError {
            format,
            message: message.into(),
        }
    }

    /// Formats whose parse attempt failed, in attempt order.
    pub fn failed_formats(&self) -> Vec<Format> {
        match self {
            Self::ParseError { format, .. } => vec![*format],
            Self::NoFormatMatched { attempts } => {
                attempts.iter().flat_map(Error::failed_formats).collect()
            }
        }
    }
}

fn join_attempts(attempts: &[Error]) -> String {
    if attempts.is_empty() {
        return "no parsers configured".to_string();
    }
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
