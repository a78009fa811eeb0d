//! Error types for the storefront behaviors.
//!
//! - [`FetchError`] - Fetching or parsing the next product page
//! - [`StorageError`] - localStorage persistence for the wishlist
//!
//! Neither crosses into JavaScript: components degrade them to label text,
//! a console message, or a silent no-op.

use thiserror::Error;

/// Errors raised while loading the next page of products.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body could not be read as text
    #[error("failed to read response: {0}")]
    ResponseRead(String),
    /// Response body is not a parseable HTML document
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Errors raised while persisting the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed iframe).
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to serialize the handle list.
    #[error("failed to serialize wishlist: {0}")]
    Serialize(String),
    /// Storage rejected the write (quota exceeded).
    #[error("failed to write to localStorage")]
    WriteFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Http(502).to_string(), "HTTP error: 502");
        assert_eq!(
            FetchError::Network("offline".to_string()).to_string(),
            "network error: offline"
        );
        assert_eq!(
            FetchError::Parse("no body".to_string()).to_string(),
            "failed to parse response: no body"
        );
    }

    #[test]
    fn test_storage_error_messages() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "localStorage not available"
        );
        assert_eq!(
            StorageError::WriteFailed.to_string(),
            "failed to write to localStorage"
        );
    }
}
