//! Error types for outbound HTTP calls.
//!
//! These never cross the data-access boundary as `Err`; their `Display`
//! text becomes the `error` field of an [`ApiResponse`](super::ApiResponse).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Connection, TLS, timeout or body read failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the expected JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Caller supplied a header that cannot be sent.
    #[error("Invalid header '{name}'")]
    InvalidHeader { name: String },
}

impl ApiError {
    /// Short machine-readable classification, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "http_status",
            ApiError::Transport(_) => "transport",
            ApiError::Decode(_) => "decode",
            ApiError::Encode(_) => "encode",
            ApiError::InvalidHeader { .. } => "invalid_header",
        }
    }
}
