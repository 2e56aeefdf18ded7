//! Custom error types for receiptbook
//!
//! This module defines the error hierarchy for the client using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for receiptbook operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The request never completed (connection refused, DNS, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status
    #[error("Server returned {status}{}", detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A receipt upload that did not succeed; carries the status text shown
    #[error("{0}")]
    Upload(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ClientError {
    /// Create a "not found" error for receipts
    pub fn receipt_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Receipt",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the request reached the server
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias for receiptbook operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            status: 400,
            detail: Some("Upload an image file".into()),
        };
        assert_eq!(err.to_string(), "Server returned 400: Upload an image file");
        assert!(err.is_status());

        let bare = ClientError::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(bare.to_string(), "Server returned 502");
    }

    #[test]
    fn test_not_found_error() {
        let err = ClientError::receipt_not_found("7");
        assert_eq!(err.to_string(), "Receipt not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ClientError = io_err.into();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
