//! Error types for modelstore

use thiserror::Error;

/// Failure reported by the request-sending layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, timeout or body stream failure
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Main error type for modelstore
#[derive(Error, Debug)]
pub enum ModelStoreError {
    /// Request failed
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// Response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelStoreError {
    pub fn is_request(&self) -> bool {
        matches!(self, ModelStoreError::Request(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ModelStoreError::Decode(_))
    }
}

/// Result type for modelstore operations
pub type ModelStoreResult<T> = Result<T, ModelStoreError>;

impl From<serde_json::Error> for ModelStoreError {
    fn from(err: serde_json::Error) -> Self {
        ModelStoreError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ModelStoreError {
    fn from(err: toml::de::Error) -> Self {
        ModelStoreError::Config(err.to_string())
    }
}
