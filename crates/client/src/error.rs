//! Error types for the App Search client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during App Search client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from App Search.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The API key was rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid response format from App Search.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A required credential was not supplied to the builder.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// HTTP interception is on and the base URL is not an interception server.
    #[cfg(feature = "test-utils")]
    #[error("Client for {0} bypasses HTTP interception; build it with TestContext::client()")]
    UninterceptedEndpoint(String),
}

impl ClientError {
    /// Check if this error indicates the API key was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
