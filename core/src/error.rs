//! Error types for the SatisfyCX API client.
//!
//! # Design
//! Three failure kinds reach callers: the transport failed, the server
//! answered with a non-success status, or the body did not decode. Transport
//! and decode errors are passed through untouched. A non-success status
//! keeps the raw response body so the server's own message is visible.

use thiserror::Error;

/// Errors returned by `ScxClient` and its facades.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, DNS, timeout or body read failure from the HTTP agent.
    #[error(transparent)]
    Transport(#[from] ureq::Error),

    /// The server returned something other than 200.
    #[error("{operation} failed: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The response body is not valid JSON for the expected shape.
    #[error(transparent)]
    Decode(serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),

    /// An identifier that URL normalization would drop from the path.
    #[error("identifier {0:?} cannot be used as a path segment")]
    InvalidId(String),

    #[error("invalid base path: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Missing or unusable client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status code of a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
