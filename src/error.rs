//! Flokkr error types

use std::time::Duration;

/// Flokkr error types
#[derive(Debug, thiserror::Error)]
pub enum FlokkrError {
    // Provider/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error(
        "API key not found. Set the OPENAI_API_KEY environment variable or pass a key explicitly"
    )]
    MissingApiKey,

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// The model answered with a label outside the configured set.
    #[error("invalid label '{label}', must be one of: {allowed}")]
    InvalidLabel { label: String, allowed: String },

    #[error("data error: {0}")]
    Data(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Soft errors
    #[error("empty response from model")]
    EmptyResponse,
}

impl FlokkrError {
    /// Whether the error is transient and worth retrying.
    ///
    /// Network failures, rate limits, and server-side (5xx) API errors are
    /// transient. Everything else is permanent and returned immediately.
    pub fn is_transient(&self) -> bool {
        match self {
            FlokkrError::Http(_) | FlokkrError::RateLimited { .. } => true,
            FlokkrError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Provider-suggested retry delay, if the error carries one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            FlokkrError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for flokkr operations
pub type Result<T> = std::result::Result<T, FlokkrError>;
