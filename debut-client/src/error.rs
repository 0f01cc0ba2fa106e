//! Client error types

use thiserror::Error;

use shared::validation::FieldError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the submission with field-level detail
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Server-side failure (opaque message)
    #[error("Server error: {0}")]
    Server(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
