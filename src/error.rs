//! API Error Types

use thiserror::Error;

/// Everything that can go wrong talking to the listings backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS)
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("failed to parse JSON: {0}")]
    Decode(String),

    #[error("response is missing \"{0}\"")]
    MissingKey(&'static str),

    /// Multipart body could not be assembled
    #[error("failed to build request body: {0}")]
    Body(String),

    #[error("{0}")]
    Validation(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
