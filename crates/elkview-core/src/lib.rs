//! # elkview core
//!
//! Platform-independent half of the elkview results page: everything except
//! the Dioxus components.
//!
//! ## Modules
//!
//! - [`config`] - Fixed search parameters and backend configuration
//! - [`error`] - Error type for fetch and decode failures
//! - [`search`] - Request/response model, HTTP transport, search client
//! - [`view`] - View state union and the one-shot fetch run on mount

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod search;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::SearchError;
pub use search::{Hit, SearchClient};
pub use view::{InitialFetch, MountFlag, ViewState};
