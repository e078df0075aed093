//! API error types

use reqwest::StatusCode;
use thiserror::Error;

/// Faults that prevent an endpoint call from producing a response envelope
///
/// Non-2xx statuses are not errors; they are returned inside the envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or endpoint path could not form a valid URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Client settings that cannot produce a working transport
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),

    /// Connectivity, timeout or TLS failure before a response arrived
    #[error("Transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A successful response whose body does not match the expected schema
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Wrap any transport-level error
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(err.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
