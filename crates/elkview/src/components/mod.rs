//! UI components for the elkview results page.
//!
//! - `app_shell`: page header around the results
//! - `results`: [`ResultView`] and the presentational pieces it renders
//!
//! # Context Providers
//!
//! [`ResultView`] reads its [`SearchClient`] from Dioxus context rather than
//! props, so the view itself stays unconfigurable:
//!
//! ```ignore
//! // Provided once near the root
//! use_context_provider(|| client.clone());
//!
//! // Read inside the results view
//! let client = use_search_client();
//! ```

mod app_shell;
pub mod results;

pub use app_shell::PageHeader;
pub use results::{ResultBody, ResultView};

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use elkview_core::config::FETCH_ERROR_MESSAGE;
use elkview_core::{SearchClient, ViewState};

use crate::platform::create_search_client;

/// Search client context provider
pub fn use_search_client() -> SearchClient {
    use_context::<SearchClient>()
}

/// Provides `client` to the results view below it.
#[component]
pub fn ResultsSection(client: SearchClient) -> Element {
    use_context_provider(|| client.clone());

    rsx! {
        ResultView {}
    }
}

/// Main app component: header plus results.
///
/// The platform client is built once. If that fails no request is made and
/// the page shows the same message as a failed fetch.
#[component]
pub fn App() -> Element {
    let client = use_hook(|| match create_search_client() {
        Ok(client) => Some(client),
        Err(e) => {
            error!("Failed to create search client: {}", e);
            None
        }
    });

    let results = match client {
        Some(client) => rsx! {
            ResultsSection { client }
        },
        None => rsx! {
            ResultBody { state: ViewState::Error(FETCH_ERROR_MESSAGE.to_string()) }
        },
    };

    rsx! {
        main { class: "ev-page",
            PageHeader {}
            {results}
        }
    }
}
