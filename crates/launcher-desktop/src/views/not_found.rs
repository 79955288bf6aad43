use dioxus::prelude::*;

use launcher_core::Icon;

use crate::components::{IconGlyph, SettingsRow};
use crate::routes::{navigate_to, Route};

/// Fallback for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No route matches {}", path);
    let description = format!("Nothing lives at {path}");

    rsx! {
        div {
            class: "settings-list",
            style: "padding: 24px;",

            SettingsRow {
                title: "Page not found",
                description: description,
                icon: rsx! { IconGlyph { icon: Icon::Globe } },
                onclick: move |()| {
                    navigate_to(Route::Home {});
                },
                span { "Go home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_the_missing_path_with_a_way_home() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                NotFound { segments: vec!["clusters".to_string(), "nowhere".to_string()] }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Nothing lives at /clusters/nowhere"));
        assert!(html.contains("settings-row--interactive"));
        assert!(html.contains("Go home"));
    }
}
