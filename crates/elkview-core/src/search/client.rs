use std::fmt;
use std::rc::Rc;

use instant::Instant;
use tracing::{info, warn};

use super::transport::{ReqwestTransport, SearchTransport};
use super::types::{Hit, SearchRequest, SearchResponse};
use crate::config::{ClientConfig, SEARCH_PATH};
use crate::error::SearchError;

/// Issues the fixed match-all search and decodes its hits.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct SearchClient {
    transport: Rc<dyn SearchTransport>,
}

impl SearchClient {
    /// Client over an arbitrary transport.
    pub fn new(transport: Rc<dyn SearchTransport>) -> Self {
        Self { transport }
    }

    /// Client talking HTTP to the backend described by `config`.
    pub fn http(config: ClientConfig) -> Result<Self, SearchError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(Rc::new(transport)))
    }

    /// Runs the search once.
    ///
    /// Any transport failure, non-2xx status, or body without `hits.hits`
    /// comes back as an error. Hits keep backend order.
    pub async fn fetch_hits(&self) -> Result<Vec<Hit>, SearchError> {
        let body = SearchRequest::match_all()
            .to_body()
            .map_err(|e| SearchError::Encode(e.to_string()))?;

        let start = Instant::now();
        let response = self.transport.post_json(SEARCH_PATH, body).await?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        if !response.is_success() {
            warn!(
                "Search returned HTTP {} after {:.1}ms",
                response.status, elapsed_ms
            );
            return Err(SearchError::Status(response.status));
        }

        let hits = SearchResponse::from_slice(&response.body)?.into_hits();
        info!("Search returned {} hits in {:.1}ms", hits.len(), elapsed_ms);

        Ok(hits)
    }
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient").finish_non_exhaustive()
    }
}

/// Clients compare equal when they share a transport.
impl PartialEq for SearchClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}
