use dioxus::prelude::*;
use elkview_core::{Hit, ViewState};

/// Renders exactly one of: loading indicator, error message, result list.
#[component]
pub fn ResultBody(state: ViewState) -> Element {
    match state {
        ViewState::Loading => rsx! {
            LoadingIndicator {}
        },
        ViewState::Error(message) => rsx! {
            ErrorMessage { message }
        },
        ViewState::Ready(hits) => rsx! {
            ResultList { hits }
        },
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p { class: "ev-status ev-status--loading", "Loading data..." }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        p { class: "ev-status ev-status--error", role: "alert", "{message}" }
    }
}

/// Fetched documents, in the order the backend returned them.
///
/// The list container is rendered even when there are no hits.
#[component]
pub fn ResultList(hits: Vec<Hit>) -> Element {
    rsx! {
        section { class: "ev-results",
            h2 { class: "ev-results-title", "Fetched Data:" }
            ul { class: "ev-results-list",
                for (idx, hit) in hits.iter().enumerate() {
                    ResultItem {
                        key: "{idx}",
                        text: hit.source_text(),
                    }
                }
            }
        }
    }
}

/// One document source as compact JSON text
#[component]
pub fn ResultItem(text: String) -> Element {
    rsx! {
        li { class: "ev-result-item", "{text}" }
    }
}
