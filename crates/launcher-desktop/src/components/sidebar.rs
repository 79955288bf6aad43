//! Section sidebar with grouped navigation links

use dioxus::prelude::*;

use launcher_core::{Icon, NavGroup, NavState};

use super::IconGlyph;
use crate::routes::{navigate_to, Route};

/// Sidebar listing `links` under `base`.
///
/// Every link carries `state.id` as its `id` query parameter so moving
/// between pages keeps the selected item. The link matching the router's
/// current path is highlighted; outside a router nothing is.
#[component]
pub fn Sidebar(#[props(into)] base: String, state: NavState, links: Vec<NavGroup>) -> Element {
    let current_route = try_consume_context::<RouterContext>()
        .map(|router| router.current::<Route>().to_string());

    rsx! {
        aside {
            class: "sidebar",

            for group in links {
                div {
                    key: "{group.title}",
                    class: "sidebar-group",

                    div {
                        class: "sidebar-group-title",
                        "{group.title}"
                    }

                    for link in group.links {
                        SidebarLink {
                            key: "{link.path}",
                            href: link.href(&base, &state),
                            label: link.label,
                            icon: link.icon,
                            is_active: current_route
                                .as_deref()
                                .is_some_and(|route| link.is_active(&base, route)),
                        }
                    }
                }
            }
        }
    }
}

/// Single sidebar entry
#[component]
fn SidebarLink(href: String, label: &'static str, icon: Icon, is_active: bool) -> Element {
    let class = if is_active {
        "sidebar-link sidebar-link--active"
    } else {
        "sidebar-link"
    };
    let target = href.clone();

    rsx! {
        a {
            class: class,
            href: "{href}",
            "aria-current": if is_active { "page" },
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                tracing::debug!("Sidebar navigating to {}", target);
                navigate_to(target.clone());
            },
            IconGlyph { icon: icon }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use launcher_core::{cluster_nav, CLUSTER_BASE_PATH};

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn links_carry_the_selected_id() {
        let html = render(|| {
            rsx! {
                Sidebar {
                    base: CLUSTER_BASE_PATH,
                    state: NavState { id: Some("abc".to_string()) },
                    links: cluster_nav(),
                }
            }
        });

        assert!(html.contains(r#"href="/clusters/?id=abc""#));
        assert!(html.contains(r#"href="/clusters/logs?id=abc""#));
        assert!(html.contains(r#"href="/clusters/settings/process?id=abc""#));
    }

    #[test]
    fn links_without_id_have_no_query() {
        let html = render(|| {
            rsx! {
                Sidebar {
                    base: CLUSTER_BASE_PATH,
                    state: NavState::default(),
                    links: cluster_nav(),
                }
            }
        });

        assert!(html.contains(r#"href="/clusters/mods""#));
        assert!(!html.contains("?id="));
    }

    #[test]
    fn groups_and_labels_keep_declared_order() {
        let html = render(|| {
            rsx! {
                Sidebar {
                    base: CLUSTER_BASE_PATH,
                    state: NavState::default(),
                    links: cluster_nav(),
                }
            }
        });

        let order = [
            "Cluster",
            "Overview",
            "Logs",
            "Mods",
            "Screenshots",
            "Worlds",
            "Settings",
            "Game",
            "Process",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| {
                html.find(&format!(">{needle}<"))
                    .unwrap_or_else(|| panic!("{needle} missing from {html}"))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn nothing_is_active_outside_a_router() {
        let html = render(|| {
            rsx! {
                Sidebar {
                    base: CLUSTER_BASE_PATH,
                    state: NavState::default(),
                    links: cluster_nav(),
                }
            }
        });

        assert!(!html.contains("sidebar-link--active"));
    }
}
