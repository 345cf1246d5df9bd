// src/api/error.rs

use thiserror::Error;

/// Failures crossing the adapter boundary. Every upstream call either
/// succeeds with a typed payload or fails with one of these; there are no
/// retries at this layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status or a transport-level failure.
    #[error("upstream unavailable for {resource} (status {status:?})")]
    UpstreamUnavailable {
        resource: String,
        status: Option<u16>,
    },

    /// The upstream answered but the payload did not match the documented shape.
    #[error("invalid payload for {resource}: {message}")]
    InvalidPayload { resource: String, message: String },
}

impl ApiError {
    pub fn unavailable(resource: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            resource: resource.into(),
            status: None,
        }
    }

    pub fn status(resource: impl Into<String>, status: u16) -> Self {
        Self::UpstreamUnavailable {
            resource: resource.into(),
            status: Some(status),
        }
    }

    /// The resource identifier the failed operation was addressing.
    pub fn resource(&self) -> &str {
        match self {
            Self::UpstreamUnavailable { resource, .. } => resource,
            Self::InvalidPayload { resource, .. } => resource,
        }
    }
}
