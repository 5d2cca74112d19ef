//! Error types for the Edgeline SDK

use thiserror::Error;

/// Errors that can occur when using the Edgeline SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// Rejected input (empty node id or edge endpoint)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Edge endpoint does not exist in the store
    #[error("Referential error: {0}")]
    Referential(String),

    /// Any other non-success response from the server
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// Base URL cannot be turned into a request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Successful response whose body has the wrong shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// HTTP transport error (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<edgeline::GraphError> for SdkError {
    fn from(e: edgeline::GraphError) -> Self {
        match e.kind() {
            edgeline::ErrorKind::Validation => SdkError::Validation(e.to_string()),
            edgeline::ErrorKind::Referential => SdkError::Referential(e.to_string()),
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
