use dioxus::prelude::*;

/// Page title and intro line
#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header { class: "ev-header",
            h1 { class: "ev-title", "Elastic Results Page!" }
            p { class: "ev-intro",
                "This should hopefully return some data when connected to the right endpoint."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_title_and_intro() {
        let mut dom = VirtualDom::new(PageHeader);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Elastic Results Page!"));
        assert!(html.contains("connected to the right endpoint."));
    }
}
