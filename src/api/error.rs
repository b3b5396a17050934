//! Failure taxonomy for remote API calls.

use thiserror::Error;

/// Any failure of a single API call. Never retried.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request URL could not be built or parsed.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, TLS or timeout failure.
    #[error("Network request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl NetworkError {
    /// Whether a manual retry by the user could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Transport { .. } => true,
            NetworkError::Status { status, .. } => *status == 429 || *status >= 500,
            NetworkError::Decode { .. } => false,
        }
    }

    /// Short machine-readable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            NetworkError::InvalidUrl { .. } => "invalid_url",
            NetworkError::Transport { .. } => "transport",
            NetworkError::Status { .. } => "status",
            NetworkError::Decode { .. } => "decode",
        }
    }
}
