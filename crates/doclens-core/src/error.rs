//! Centralized error types for doclens.

use thiserror::Error;

/// Main error type for doclens operations.
#[derive(Error, Debug)]
pub enum DoclensError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Normalization failed: {0}")]
    Normalization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for doclens operations.
pub type DoclensResult<T> = Result<T, DoclensError>;

impl DoclensError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a model invocation error.
    pub fn model_invocation(msg: impl Into<String>) -> Self {
        Self::ModelInvocation(msg.into())
    }

    /// Create a normalization error.
    pub fn normalization(msg: impl Into<String>) -> Self {
        Self::Normalization(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
