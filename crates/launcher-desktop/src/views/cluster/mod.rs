//! Cluster section: sidebar navigation around routed cluster pages

mod pages;

use dioxus::prelude::*;

use launcher_core::{cluster_nav, NavState, CLUSTER_BASE_PATH};

use crate::components::{RouteTransition, Sidebar};
use crate::routes::Route;

pub use pages::{
    ClusterGameSettings, ClusterLogs, ClusterMods, ClusterOverview, ClusterProcessSettings,
    ClusterScreenshots, ClusterWorlds,
};

/// Layout route for every `/clusters` page.
///
/// Re-runs on each navigation, taking the `id` of the matched route and
/// rendering the matched page in the content region.
#[component]
pub fn ClusterRoot() -> Element {
    let route = use_route::<Route>();
    let state = nav_state(&route);

    rsx! {
        ClusterLayout {
            state: state,
            route_key: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

/// Sidebar state for the matched route.
pub fn nav_state(route: &Route) -> NavState {
    NavState::from_id(route.cluster_id())
}

/// Two-region cluster layout: sidebar plus animated, fault-isolated content.
#[component]
pub fn ClusterLayout(state: NavState, #[props(into)] route_key: String, children: Element) -> Element {
    rsx! {
        div {
            class: "cluster-root",

            Sidebar {
                base: CLUSTER_BASE_PATH,
                state: state,
                links: cluster_nav(),
            }

            main {
                class: "cluster-content",

                RouteTransition {
                    route_key: route_key,
                    ErrorBoundary {
                        handle_error: route_error_fallback,
                        {children}
                    }
                }
            }
        }
    }
}

fn route_error_fallback(errors: ErrorContext) -> Element {
    let messages: Vec<String> = errors.errors().iter().map(ToString::to_string).collect();
    for message in &messages {
        tracing::error!("Cluster page failed to render: {}", message);
    }

    rsx! {
        div {
            class: "route-error",
            role: "alert",
            h2 { "This page failed to load" }
            for message in messages {
                pre { "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::NoOpMutations;
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        // Error boundaries re-render after the first pass.
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn nav_state_reads_id_from_route() {
        let route = Route::ClusterLogs {
            id: "abc".to_string(),
        };
        assert_eq!(
            nav_state(&route),
            NavState {
                id: Some("abc".to_string())
            }
        );
    }

    #[test]
    fn nav_state_keeps_reserved_characters() {
        let route = Route::ClusterMods {
            id: "a&b c+d".to_string(),
        };
        assert_eq!(nav_state(&route).id.as_deref(), Some("a&b c+d"));
    }

    #[test]
    fn nav_state_without_id_is_empty() {
        let route = Route::ClusterLogs { id: String::new() };
        assert_eq!(nav_state(&route), NavState { id: None });
        assert_eq!(nav_state(&Route::Settings {}), NavState { id: None });
    }

    #[test]
    fn sidebar_hrefs_encode_reserved_characters() {
        let html = render(|| {
            let route = Route::ClusterOverview {
                id: "a&b c+d".to_string(),
            };
            rsx! {
                ClusterLayout {
                    state: nav_state(&route),
                    route_key: "overview",
                    p { "overview body" }
                }
            }
        });

        assert!(html.contains("/clusters/logs?id=a%26b%20c%2Bd"));
    }

    #[test]
    fn layout_renders_sidebar_and_children() {
        let html = render(|| {
            rsx! {
                ClusterLayout {
                    state: NavState { id: Some("abc".to_string()) },
                    route_key: "/clusters/?id=abc",
                    p { "overview body" }
                }
            }
        });

        let sidebar = html.find("sidebar").unwrap();
        let content = html.find("overview body").unwrap();
        assert!(sidebar < content);
        assert!(html.contains(r#"href="/clusters/worlds?id=abc""#));
        assert!(html.contains("route-transition"));
    }

    #[component]
    fn Exploding() -> Element {
        Err(RenderError::Aborted(CapturedError::from_display(
            "cluster manifest is corrupt",
        )))
    }

    #[test]
    fn failing_page_does_not_take_down_the_sidebar() {
        let html = render(|| {
            rsx! {
                ClusterLayout {
                    state: NavState::default(),
                    route_key: "/clusters/",
                    Exploding {}
                }
            }
        });

        assert!(html.contains("Overview"));
        assert!(html.contains("Process"));
        assert!(html.contains("route-error"));
        assert!(html.contains("This page failed to load"));
        assert!(html.contains("cluster manifest is corrupt"));
    }
}
