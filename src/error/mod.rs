//! Error types for fishtts.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`TtsError`], used when flattening failures
/// into tool results and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    OutOfRange,
    InvalidArgument,
    Path,
    RemoteSynthesis,
    Write,
    Configuration,
    Serialization,
    Server,
}

/// Primary error type for all synthesis operations.
#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Text cannot be empty")]
    EmptyInput,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i128,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to create directory {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote synthesis error: {0}")]
    RemoteSynthesis(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl TtsError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Path { .. } => ErrorKind::Path,
            Self::Authentication(_)
            | Self::Api { .. }
            | Self::Network(_)
            | Self::RemoteSynthesis(_) => ErrorKind::RemoteSynthesis,
            Self::Write { .. } => ErrorKind::Write,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Server(_) => ErrorKind::Server,
        }
    }

    /// Whether the request was rejected before anything was sent to the API.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyInput | ErrorKind::OutOfRange | ErrorKind::InvalidArgument
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TtsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_bounds_and_value() {
        let err = TtsError::OutOfRange {
            field: "chunk_length",
            min: 100,
            max: 300,
            value: 99,
        };
        assert_eq!(
            err.to_string(),
            "chunk_length must be between 100 and 300, got 99"
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(err.is_validation());
    }

    #[test]
    fn remote_failures_share_a_kind() {
        assert_eq!(
            TtsError::Authentication("bad key".into()).kind(),
            ErrorKind::RemoteSynthesis
        );
        assert_eq!(TtsError::api(500, "oops").kind(), ErrorKind::RemoteSynthesis);
        assert!(!TtsError::api(402, "quota").is_validation());
    }

    #[test]
    fn kind_renders_snake_case() {
        assert_eq!(ErrorKind::RemoteSynthesis.to_string(), "remote_synthesis");
    }
}
