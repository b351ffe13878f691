//! Elasticsearch search: wire types, transport seam, and client.
//!
//! - [`types`]: request body and response model
//! - [`transport`]: [`SearchTransport`] trait and reqwest implementation
//! - [`client`]: [`SearchClient`], the fixed match-all fetch

pub mod client;
pub mod transport;
pub mod types;

pub use client::SearchClient;
pub use transport::{ReqwestTransport, SearchTransport, TransportResponse};
pub use types::{Hit, SearchRequest, SearchResponse};
