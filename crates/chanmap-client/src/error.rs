//! Error types for backend calls.

use thiserror::Error;

/// Errors returned by backend operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("network error calling {url}: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode response from {url}: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder error.
        message: String,
    },

    /// The API token cannot be sent as an HTTP header value.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Setup(String),
}

impl ClientError {
    /// HTTP status code, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns a short message suitable for a per-row failure summary.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Transport { message, .. } => format!("network error: {message}"),
            Self::Status { status, body, .. } if body.is_empty() => format!("HTTP {status}"),
            Self::Status { status, body, .. } => format!("HTTP {status}: {body}"),
            Self::Decode { message, .. } => format!("bad response: {message}"),
            Self::InvalidToken | Self::Setup(_) => self.to_string(),
        }
    }
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, ClientError>;
