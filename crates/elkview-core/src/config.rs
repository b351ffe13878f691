//! Fixed search parameters and client configuration.
//!
//! The results page always asks for the same thing: the newest handful of
//! documents from the Logstash indices. Nothing here is caller-tunable except
//! where the backend lives.
//!
//! # Usage
//!
//! ```
//! use elkview_core::config::{ClientConfig, RESULT_LIMIT, SEARCH_PATH};
//!
//! let config = ClientConfig::new("http://localhost:9200").unwrap();
//! let url = config.resolve(SEARCH_PATH).unwrap();
//! assert_eq!(url.path(), "/logstash-*/_search");
//! assert_eq!(RESULT_LIMIT, 5);
//! ```

use std::time::Duration;
use url::Url;

use crate::error::SearchError;

// =============================================================================
// Search Parameters
// =============================================================================

/// Search endpoint over the Logstash indices, relative to the backend origin.
pub const SEARCH_PATH: &str = "/logstash-*/_search";

/// Maximum number of hits requested from the backend.
pub const RESULT_LIMIT: usize = 5;

// =============================================================================
// User-facing Text
// =============================================================================

/// Message shown for every fetch or decode failure.
///
/// The underlying error only goes to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data from Elasticsearch";

// =============================================================================
// HTTP Client
// =============================================================================

/// Per-request timeout on native platforms.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent by the native HTTP client.
pub const USER_AGENT: &str = concat!("elkview/", env!("CARGO_PKG_VERSION"));

/// Where the search backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin. Only scheme, host and port matter since
    /// [`SEARCH_PATH`] is absolute.
    pub base_url: Url,
    /// Request timeout (ignored on wasm, where the browser owns timeouts).
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parses `base_url` and applies the default timeout.
    ///
    /// Only `http` and `https` origins are accepted.
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| SearchError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(SearchError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: parsed,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }

    /// Resolves `path` against the backend origin.
    pub fn resolve(&self, path: &str) -> Result<Url, SearchError> {
        self.base_url
            .join(path)
            .map_err(|e| SearchError::InvalidUrl(format!("{}: {}", path, e)))
    }
}
