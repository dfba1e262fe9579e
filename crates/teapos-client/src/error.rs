//! Error type for backend API operations.

use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL is unusable.
    #[error("invalid base URL: {0:?}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
