//! Gateway error types.
//!
//! [`FetchError`] describes what went wrong in the HTTP exchange. Callers
//! above the gateway only ever see [`ApiError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while performing an HTTP exchange.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// The configured endpoint is not a usable base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// HTTP status, for service errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

/// Uniform failure value handed to everything above the gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message shown to the user.
    pub message: String,
    /// HTTP status, when the service answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiError {
    /// Create an error without a status code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Create an error for a non-2xx status.
    pub fn from_status(status: u16) -> Self {
        FetchError::Http { status }.into()
    }

    /// Check if the service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        Self {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_keep_code() {
        let err = ApiError::from(FetchError::Http { status: 404 });
        assert_eq!(err.message, "HTTP error! status: 404");
        assert_eq!(err.status, Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        let err = ApiError::from(FetchError::Transport("connection refused".into()));
        assert_eq!(err.message, "connection refused");
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_parse_errors_have_no_status() {
        let err = ApiError::from(FetchError::Parse("expected value at line 1".into()));
        assert!(err.message.starts_with("Failed to parse response"));
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(ApiError::from_status(500).to_string(), "HTTP error! status: 500");
        assert_eq!(ApiError::new("offline").to_string(), "offline");
    }
}
