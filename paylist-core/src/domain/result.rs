//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Sources report failures through this type and loaders forward them
/// unchanged, so the message is what the user eventually sees.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a source error
    pub fn source_failure(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a cache error
    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }

    /// True for the fail-fast error returned by null collaborators
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
