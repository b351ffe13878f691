//! Test utilities for elkview-core.
//!
//! Provides a scripted [`SearchTransport`] that records every request it
//! receives. Compiled for unit tests and, through the `test-utils` feature,
//! for the app crate's tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::search::{SearchTransport, TransportResponse};

/// One request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub body: String,
}

/// Transport that answers every request with the same canned reply.
#[derive(Debug)]
pub struct MockTransport {
    reply: Result<TransportResponse, SearchError>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Answers with HTTP 200 and `body`.
    pub fn ok(body: &str) -> Rc<Self> {
        Self::status(200, body)
    }

    /// Answers with `status` and `body`.
    pub fn status(status: u16, body: &str) -> Rc<Self> {
        Rc::new(Self {
            reply: Ok(TransportResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            requests: RefCell::new(Vec::new()),
        })
    }

    /// Fails every request with `error`.
    pub fn failing(error: SearchError) -> Rc<Self> {
        Rc::new(Self {
            reply: Err(error),
            requests: RefCell::new(Vec::new()),
        })
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl SearchTransport for MockTransport {
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse, SearchError> {
        self.requests.borrow_mut().push(RecordedRequest {
            path: path.to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
        self.reply.clone()
    }
}
