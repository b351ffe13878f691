use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use elkview_core::{InitialFetch, MountFlag, ViewState};

use super::ResultBody;
use crate::components::use_search_client;

/// Results view: fetches once on mount, then renders the resolved state.
///
/// Takes no props; the client comes from context. The fetch is created in a
/// hook, so re-renders caused by the state update never issue another
/// request. Results that arrive after unmount are dropped.
#[component]
pub fn ResultView() -> Element {
    let client = use_search_client();
    let mut state = use_signal(ViewState::default);
    let mount = use_hook(MountFlag::new);

    let unmount = mount.clone();
    use_drop(move || unmount.release());

    use_hook(move || {
        let fetch = InitialFetch::new(client, mount);
        info!("Fetching latest documents from Elasticsearch");

        spawn(async move {
            if let Some(resolved) = fetch.run().await {
                state.set(resolved);
            }
        })
    });

    rsx! {
        ResultBody { state: state() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ResultsSection, ResultsSectionProps};
    use elkview_core::test_utils::MockTransport;
    use elkview_core::SearchClient;
    use std::rc::Rc;

    fn mount_with(mock: Rc<MockTransport>) -> VirtualDom {
        let props = ResultsSectionProps::builder()
            .client(SearchClient::new(mock))
            .build();
        let mut dom = VirtualDom::new_with_props(ResultsSection, props);
        dom.rebuild_in_place();
        dom
    }

    async fn settle(dom: &mut VirtualDom) {
        dom.wait_for_work().await;
        let _ = dom.render_immediate_to_vec();
    }

    #[tokio::test]
    async fn test_loading_until_fetch_resolves() {
        let mock = MockTransport::ok(r#"{"hits":{"hits":[{"_source":{"msg":"a"}},{"_source":{"msg":"b"}}]}}"#);
        let mut dom = mount_with(mock.clone());

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Loading data..."));
        assert!(!html.contains("<ul"));

        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("Loading data..."));
        assert_eq!(html.matches("<li").count(), 2);
        // The state update re-rendered the view without issuing another request.
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_server_error_shows_message() {
        let mut dom = mount_with(MockTransport::status(500, ""));

        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Failed to fetch data from Elasticsearch"));
        assert!(!html.contains("Loading data..."));
        assert!(!html.contains("<ul"));
    }

    #[tokio::test]
    async fn test_unmount_before_resolution_drops_pending_fetch() {
        let mock = MockTransport::ok(r#"{"hits":{"hits":[{"_source":{"msg":"late"}}]}}"#);
        let dom = mount_with(mock.clone());
        assert!(dioxus_ssr::render(&dom).contains("Loading data..."));

        drop(dom);

        // The unresolved fetch task and its client went away with the component.
        assert_eq!(Rc::strong_count(&mock), 1);
    }
}
