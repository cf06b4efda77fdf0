//! Error types for the Vizdash SDK

use thiserror::Error;

/// Errors that can occur when using the Vizdash SDK
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The record source behind the engine failed (embedded mode)
    #[error("Source error: {0}")]
    SourceError(#[from] vizdash::SourceError),

    /// The server answered with an error status (remote mode)
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Connection error (remote mode)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
