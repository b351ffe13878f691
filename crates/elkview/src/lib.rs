//! elkview - Elasticsearch results page.
//!
//! A single page that asks the backend for the newest few Logstash documents
//! on load and lists their sources. The fetch, response model and view state
//! live in `elkview-core`; this crate holds the Dioxus components and the
//! per-platform wiring.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: posts to the page's own origin
//! - **Desktop**: posts to `$ELKVIEW_ES_URL` (default `http://localhost:9200`)

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
