//! HTTP transport seam for the search client.
//!
//! [`SearchTransport`] is the only place the client touches the network.
//! [`ReqwestTransport`] is the production implementation. reqwest works on
//! both native and WASM platforms:
//! - Native: Uses hyper with rustls-tls for HTTPS
//! - WASM: Uses browser fetch() API internally

use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::config::USER_AGENT;
use crate::error::SearchError;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends JSON bodies to the search backend.
///
/// Futures are `?Send` so browser-backed implementations fit.
#[async_trait(?Send)]
pub trait SearchTransport {
    /// POSTs `body` as `application/json` to `path` on the backend.
    ///
    /// Non-2xx responses are returned as `Ok`; status checking belongs to the
    /// caller.
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse, SearchError>;
}

/// reqwest-backed transport bound to one backend origin.
///
/// reqwest::Client pools connections internally, so one transport is built
/// per app and shared.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    /// Builds the HTTP client for `config`.
    ///
    /// Configured with (native only):
    /// - the configured request timeout
    /// - a user agent identifying elkview
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Builds the HTTP client for `config`. The browser owns timeouts and
    /// the user agent on wasm.
    #[cfg(target_arch = "wasm32")]
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SearchError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait(?Send)]
impl SearchTransport for ReqwestTransport {
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse, SearchError> {
        let url = self.config.resolve(path)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let ok = TransportResponse {
            status: 200,
            body: Vec::new(),
        };
        let no_content = TransportResponse {
            status: 204,
            body: Vec::new(),
        };
        let redirect = TransportResponse {
            status: 302,
            body: Vec::new(),
        };
        let server_error = TransportResponse {
            status: 500,
            body: Vec::new(),
        };

        assert!(ok.is_success());
        assert!(no_content.is_success());
        assert!(!redirect.is_success());
        assert!(!server_error.is_success());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_request_error() {
        // Nothing listens on the discard port.
        let config = ClientConfig::new("http://127.0.0.1:9").unwrap();
        let transport = ReqwestTransport::new(config).unwrap();

        let result = transport.post_json("/logstash-*/_search", b"{}".to_vec()).await;
        assert!(matches!(
            result,
            Err(SearchError::RequestFailed(_)) | Err(SearchError::Timeout(_))
        ));
    }
}
