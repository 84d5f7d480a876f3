//! Error types for gridlink.

use thiserror::Error;

/// Result type for gridlink operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur across gridlink crates.
#[derive(Debug, Error)]
pub enum GridError {
    /// Configuration error from user-supplied input.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Reporting endpoint returned an error response.
    #[error("Query error: {0}")]
    Query(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an HTTP error.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }
}
