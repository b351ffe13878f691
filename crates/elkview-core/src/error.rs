//! Error types for the search client.
//!
//! The variants exist for diagnostics. Everything that reaches the view is
//! collapsed to [`FETCH_ERROR_MESSAGE`](crate::config::FETCH_ERROR_MESSAGE).

use thiserror::Error;

/// Errors that can occur while fetching search results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Backend URL could not be parsed or has an unsupported scheme
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
    /// Request never produced a response (connection refused, DNS, CORS, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),
    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),
    /// Backend answered with a non-2xx status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    /// Request body could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(String),
    /// Response body was not a search response
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout(err.to_string())
        } else if err.is_builder() {
            SearchError::ClientBuild(err.to_string())
        } else if err.is_decode() || err.is_body() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(
            SearchError::Status(500).to_string(),
            "Unexpected HTTP status: 500"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(SearchError::from(err), SearchError::Decode(_)));
    }
}
