//! Completion client error types

use thiserror::Error;

/// Errors raised by a completion call
///
/// None of these are retried by the library; every failure propagates
/// directly to the caller of the generation operation.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if this failure came back with an authentication status
    pub fn is_auth(&self) -> bool {
        matches!(self, LlmError::ApiError { status: 401 | 403, .. })
    }
}
