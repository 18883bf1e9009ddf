/// Error types for the irrigation simulator
use crate::field::Field;
use thiserror::Error;

/// Main error type for simulator operations
#[derive(Error, Debug)]
pub enum RiegoError {
    /// A required form field was left empty
    #[error("required field \"{0}\" is empty")]
    EmptyField(Field),

    /// Identifier/secret pair did not match
    #[error("incorrect user or password")]
    InvalidCredentials,

    /// HTTP request failed before a status was received
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server answered with status {0}")]
    Status(u16),

    /// Response body was not a JSON object
    #[error("failed to decode server response: {0}")]
    Decode(String),

    /// Session store could not be read or written
    #[error("session storage failed: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for RiegoError {
    fn from(err: serde_json::Error) -> Self {
        RiegoError::Decode(err.to_string())
    }
}

/// Type alias for Results using RiegoError
pub type Result<T> = std::result::Result<T, RiegoError>;
