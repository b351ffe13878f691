//! Platform-specific backend wiring.
//!
//! The results page always posts to the same path; only the origin differs
//! by platform:
//!
//! - **Web**: the page's own origin, so a reverse proxy in front of the app
//!   can forward `/logstash-*/_search` to the cluster
//! - **Desktop**: `$ELKVIEW_ES_URL`, or a local node on port 9200

use elkview_core::config::ClientConfig;
use elkview_core::{SearchClient, SearchError};

/// Environment variable naming the backend origin on desktop.
#[cfg(not(target_arch = "wasm32"))]
pub const BACKEND_URL_ENV: &str = "ELKVIEW_ES_URL";

/// Backend origin used on desktop when `$ELKVIEW_ES_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9200";

#[cfg(not(target_arch = "wasm32"))]
static BACKEND_URL: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| resolve_backend_url(std::env::var(BACKEND_URL_ENV).ok()));

/// Picks the configured origin, falling back to [`DEFAULT_BACKEND_URL`].
///
/// Blank values count as unset.
pub fn resolve_backend_url(configured: Option<String>) -> String {
    configured
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

/// Origin of the search backend for this platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn backend_base_url() -> Result<String, SearchError> {
    Ok(BACKEND_URL.clone())
}

/// Origin of the search backend for this platform.
#[cfg(target_arch = "wasm32")]
pub fn backend_base_url() -> Result<String, SearchError> {
    let window =
        web_sys::window().ok_or_else(|| SearchError::InvalidUrl("no browser window".into()))?;

    window
        .location()
        .origin()
        .map_err(|e| SearchError::InvalidUrl(format!("page origin unavailable: {:?}", e)))
}

/// Builds the HTTP search client for this platform.
pub fn create_search_client() -> Result<SearchClient, SearchError> {
    let base_url = backend_base_url()?;
    let config = ClientConfig::new(&base_url)?;
    SearchClient::http(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_backend_url_default() {
        assert_eq!(resolve_backend_url(None), DEFAULT_BACKEND_URL);
        assert_eq!(resolve_backend_url(Some("   ".into())), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_resolve_backend_url_configured() {
        assert_eq!(
            resolve_backend_url(Some(" https://es.example.com:9243 ".into())),
            "https://es.example.com:9243"
        );
    }

    #[test]
    fn test_default_backend_url_builds_client() {
        // Whatever the environment says, the default origin is well-formed.
        let config = ClientConfig::new(DEFAULT_BACKEND_URL).unwrap();
        assert!(SearchClient::http(config).is_ok());
    }
}
