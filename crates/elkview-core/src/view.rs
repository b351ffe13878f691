//! View state for the results page and the fetch that resolves it.
//!
//! The page is in exactly one of three states. It starts in
//! [`ViewState::Loading`] and resolves once, to either a result list or the
//! fixed error message. Nothing moves it back.
//!
//! ```ignore
//! let mount = MountFlag::new();
//! let fetch = InitialFetch::new(client, mount.clone());
//!
//! // later, when the component goes away
//! mount.release();
//!
//! // resolves to None if the mount was released first
//! if let Some(state) = fetch.run().await { /* apply */ }
//! ```

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, error};

use crate::config::FETCH_ERROR_MESSAGE;
use crate::error::SearchError;
use crate::search::{Hit, SearchClient};

/// What the results page is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Request outstanding
    #[default]
    Loading,
    /// Request failed; holds the user-facing message
    Error(String),
    /// Request succeeded; hits in backend order
    Ready(Vec<Hit>),
}

impl ViewState {
    /// State for a finished fetch.
    ///
    /// Errors are logged here and replaced by [`FETCH_ERROR_MESSAGE`].
    pub fn from_outcome(outcome: Result<Vec<Hit>, SearchError>) -> Self {
        match outcome {
            Ok(hits) => ViewState::Ready(hits),
            Err(e) => {
                error!("Error fetching data from Elasticsearch: {}", e);
                ViewState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// Applies a fetch outcome if still loading.
    ///
    /// Returns whether the state changed. A resolved state ignores later
    /// outcomes.
    pub fn resolve(&mut self, outcome: Result<Vec<Hit>, SearchError>) -> bool {
        if self.is_resolved() {
            debug!("Ignoring fetch outcome for an already resolved view");
            return false;
        }
        *self = Self::from_outcome(outcome);
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_resolved(&self) -> bool {
        !self.is_loading()
    }

    /// User-facing error message, if in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Hits, if in the ready state.
    pub fn hits(&self) -> Option<&[Hit]> {
        match self {
            ViewState::Ready(hits) => Some(hits),
            _ => None,
        }
    }
}

/// Liveness of the component that started a fetch.
///
/// Clones share one flag. Once released it stays released.
#[derive(Debug, Clone)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    /// Marks the component as torn down.
    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// The single search a results view runs on mount.
///
/// [`run`](Self::run) takes `self`, so one value can only ever issue one
/// request.
#[derive(Debug)]
pub struct InitialFetch {
    client: SearchClient,
    mount: MountFlag,
}

impl InitialFetch {
    pub fn new(client: SearchClient, mount: MountFlag) -> Self {
        Self { client, mount }
    }

    /// Runs the search and returns the resolved state.
    ///
    /// Returns `None` when the mount was released while the request was in
    /// flight; the outcome is dropped.
    pub async fn run(self) -> Option<ViewState> {
        let outcome = self.client.fetch_hits().await;

        if !self.mount.is_live() {
            debug!("Results view unmounted before search completed; discarding outcome");
            return None;
        }

        let mut state = ViewState::Loading;
        state.resolve(outcome);
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockTransport;
    use serde_json::json;

    #[test]
    fn test_default_is_loading() {
        let state = ViewState::default();
        assert!(state.is_loading());
        assert!(state.error_message().is_none());
        assert!(state.hits().is_none());
    }

    #[test]
    fn test_resolve_success() {
        let mut state = ViewState::Loading;
        let hits = vec![Hit::from_source(json!({"msg": "a"}))];

        assert!(state.resolve(Ok(hits.clone())));
        assert_eq!(state, ViewState::Ready(hits));
    }

    #[test]
    fn test_resolve_failure_uses_fixed_message() {
        for err in [
            SearchError::Status(500),
            SearchError::Status(403),
            SearchError::RequestFailed("refused".into()),
            SearchError::Timeout("30s".into()),
            SearchError::Decode("missing field `hits`".into()),
        ] {
            let mut state = ViewState::Loading;
            assert!(state.resolve(Err(err)));
            assert_eq!(
                state.error_message(),
                Some("Failed to fetch data from Elasticsearch")
            );
        }
    }

    #[test]
    fn test_resolved_state_is_terminal() {
        let mut state = ViewState::Loading;
        state.resolve(Err(SearchError::Status(502)));

        assert!(!state.resolve(Ok(vec![Hit::from_source(json!({}))])));
        assert!(state.error_message().is_some());

        let mut state = ViewState::Ready(Vec::new());
        assert!(!state.resolve(Err(SearchError::Status(500))));
        assert_eq!(state, ViewState::Ready(Vec::new()));
    }

    #[test]
    fn test_mount_flag_shared_between_clones() {
        let mount = MountFlag::new();
        let other = mount.clone();
        assert!(other.is_live());

        mount.release();
        assert!(!other.is_live());
    }

    #[tokio::test]
    async fn test_initial_fetch_issues_one_request() {
        let mock = MockTransport::ok(r#"{"hits":{"hits":[{"_source":{"msg":"a"}}]}}"#);
        let fetch = InitialFetch::new(SearchClient::new(mock.clone()), MountFlag::new());

        let state = fetch.run().await.unwrap();
        assert_eq!(state.hits().map(<[Hit]>::len), Some(1));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_initial_fetch_failure() {
        let mock = MockTransport::status(500, "");
        let fetch = InitialFetch::new(SearchClient::new(mock), MountFlag::new());

        let state = fetch.run().await.unwrap();
        assert_eq!(
            state,
            ViewState::Error("Failed to fetch data from Elasticsearch".into())
        );
    }

    #[tokio::test]
    async fn test_initial_fetch_discarded_after_release() {
        let mock = MockTransport::ok(r#"{"hits":{"hits":[]}}"#);
        let mount = MountFlag::new();
        let fetch = InitialFetch::new(SearchClient::new(mock.clone()), mount.clone());

        mount.release();

        assert!(fetch.run().await.is_none());
        // The request itself is not cancelled, only its outcome.
        assert_eq!(mock.request_count(), 1);
    }
}
