//! Error types for the security API client.
//!
//! Two failure families exist: the request could not be constructed, or the
//! transport failed to complete it. A remote status such as 404 is not an
//! error here; it comes back as a normal [`crate::Response`].

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while building or dispatching a request.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The base URL or the endpoint path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    /// The request could not be assembled (e.g. body serialization failed).
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// HTTP error reported by reqwest.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request was cancelled through its cancellation token.
    #[error("Request cancelled")]
    Cancelled,

    /// The response body could not be interpreted.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Check if this error was raised before anything reached the transport.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::InvalidHeader { .. } | Self::RequestBuild(_)
        )
    }

    /// Check if this error came from the transport (network, timeout, cancellation).
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Transport(_) | Self::Cancelled
        )
    }
}
