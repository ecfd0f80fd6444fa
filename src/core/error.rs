//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage/sessionStorage operation errors

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
///
/// [`FetchError::Aborted`] is a cancellation marker, not a failure: a request
/// superseded by a newer one rejects with the DOM `AbortError`, and every
/// caller is expected to swallow it instead of surfacing it to the UI.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (DNS, CORS, connection reset, etc.)
    Network(String),
    /// HTTP error response (non-2xx status)
    Http(u16),
    /// Failed to read response body
    ResponseRead,
    /// Invalid response content (not text)
    InvalidBody,
    /// JSON parsing error
    JsonParse(String),
    /// Request was cancelled via its abort signal
    Aborted,
}

impl FetchError {
    /// Whether this error represents request cancellation.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Http(status) => write!(f, "Request failed: {}", status),
            Self::ResponseRead => write!(f, "Failed to read response"),
            Self::InvalidBody => write!(f, "Invalid response content"),
            Self::JsonParse(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Aborted => write!(f, "Request aborted"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Storage errors for localStorage/sessionStorage operations.
///
/// Storage failures never propagate to the UI: readers degrade to empty
/// state and writers roll back their optimistic update.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Storage not available (disabled, sandboxed, or quota exceeded).
    Unavailable,
    /// Failed to serialize data to JSON.
    Serialization,
    /// Failed to write to storage.
    WriteFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage not available"),
            Self::Serialization => write!(f, "failed to serialize data"),
            Self::WriteFailed => write!(f, "failed to write to storage"),
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_classification() {
        assert!(FetchError::Aborted.is_abort());
        assert!(!FetchError::Http(500).is_abort());
        assert!(!FetchError::Network("offline".into()).is_abort());
    }

    #[test]
    fn test_http_error_message_includes_status() {
        assert_eq!(FetchError::Http(404).to_string(), "Request failed: 404");
    }
}
