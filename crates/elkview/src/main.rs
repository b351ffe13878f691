use dioxus::prelude::*;
use elkview::components::App as ElkviewApp;

const MAIN_CSS: Asset = asset!("/assets/elkview.css");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Elastic Results")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(960.0, 720.0))
                .with_min_inner_size(LogicalSize::new(480.0, 360.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Web serves the bundled asset; desktop inlines the stylesheet
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/elkview.css")} }
        }

        body { class: "ev-body",
            ElkviewApp {}
        }
    }
}
