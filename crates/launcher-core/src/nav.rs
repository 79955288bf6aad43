//! Cluster section navigation table
//!
//! The sidebar of the cluster section is driven by a static table of links
//! grouped by category. The table is plain data so it can be built and
//! inspected without a UI runtime.

use crate::icon::Icon;
use crate::util::route_path;

/// Base path every cluster section link is relative to.
pub const CLUSTER_BASE_PATH: &str = "/clusters";

/// A single sidebar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub icon: Icon,
    pub label: &'static str,
    /// Path relative to the section base, always starting with `/`
    pub path: &'static str,
}

/// A titled, ordered group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub title: &'static str,
    pub links: Vec<NavLink>,
}

/// Contextual state handed to the sidebar.
///
/// `id` is the selected item taken from the current route. It is not
/// validated; an absent or empty value is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub id: Option<String>,
}

impl NavState {
    /// Build the state from an already decoded `id` value.
    ///
    /// Routers hand a missing query field over as an empty string, so an empty
    /// value means absent. Any other value is kept verbatim, untrimmed.
    pub fn from_id(id: Option<&str>) -> Self {
        Self {
            id: id.filter(|value| !value.is_empty()).map(str::to_string),
        }
    }
}

impl NavLink {
    /// Absolute href of this link under `base`, carrying the state's id.
    pub fn href(&self, base: &str, state: &NavState) -> String {
        let base = base.trim_end_matches('/');
        let mut href = format!("{base}{}", self.path);
        if let Some(id) = &state.id {
            href.push_str("?id=");
            href.push_str(&urlencoding::encode(id));
        }
        href
    }

    /// Whether this link points at `current_route` (query ignored).
    pub fn is_active(&self, base: &str, current_route: &str) -> bool {
        let base = base.trim_end_matches('/');
        let target = format!("{base}{}", self.path);
        route_path(&target) == route_path(current_route)
    }
}

/// Links shown in the cluster section sidebar, in display order.
pub fn cluster_nav() -> Vec<NavGroup> {
    vec![
        NavGroup {
            title: "Cluster",
            links: vec![
                NavLink {
                    icon: Icon::Eye,
                    label: "Overview",
                    path: "/",
                },
                NavLink {
                    icon: Icon::Terminal,
                    label: "Logs",
                    path: "/logs",
                },
                NavLink {
                    icon: Icon::Package,
                    label: "Mods",
                    path: "/mods",
                },
                NavLink {
                    icon: Icon::Image,
                    label: "Screenshots",
                    path: "/screenshots",
                },
                NavLink {
                    icon: Icon::Globe,
                    label: "Worlds",
                    path: "/worlds",
                },
            ],
        },
        NavGroup {
            title: "Settings",
            links: vec![
                NavLink {
                    icon: Icon::Gamepad,
                    label: "Game",
                    path: "/settings/game",
                },
                NavLink {
                    icon: Icon::Cpu,
                    label: "Process",
                    path: "/settings/process",
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(group: &NavGroup) -> Vec<&'static str> {
        group.links.iter().map(|link| link.label).collect()
    }

    #[test]
    fn cluster_nav_has_two_groups_in_order() {
        let groups = cluster_nav();
        let titles: Vec<_> = groups.iter().map(|group| group.title).collect();
        assert_eq!(titles, vec!["Cluster", "Settings"]);
        assert_eq!(
            labels(&groups[0]),
            vec!["Overview", "Logs", "Mods", "Screenshots", "Worlds"]
        );
        assert_eq!(labels(&groups[1]), vec!["Game", "Process"]);
    }

    #[test]
    fn cluster_nav_is_rebuilt_identically() {
        assert_eq!(cluster_nav(), cluster_nav());
    }

    #[test]
    fn from_id_treats_empty_as_absent() {
        assert_eq!(NavState::from_id(None).id, None);
        assert_eq!(NavState::from_id(Some("")).id, None);
        assert_eq!(NavState::from_id(Some("abc")).id.as_deref(), Some("abc"));
    }

    #[test]
    fn from_id_does_not_trim() {
        assert_eq!(
            NavState::from_id(Some(" abc ")).id.as_deref(),
            Some(" abc ")
        );
    }

    #[test]
    fn href_appends_encoded_id() {
        let link = cluster_nav()[0].links[1];
        let state = NavState {
            id: Some("my cluster".to_string()),
        };
        assert_eq!(
            link.href(CLUSTER_BASE_PATH, &state),
            "/clusters/logs?id=my%20cluster"
        );
        assert_eq!(
            link.href(CLUSTER_BASE_PATH, &NavState::default()),
            "/clusters/logs"
        );
    }

    #[test]
    fn href_escapes_query_delimiters_in_id() {
        let link = cluster_nav()[1].links[0];
        let state = NavState::from_id(Some("a&b c+d"));
        assert_eq!(
            link.href(CLUSTER_BASE_PATH, &state),
            "/clusters/settings/game?id=a%26b%20c%2Bd"
        );
    }

    #[test]
    fn overview_href_keeps_trailing_slash() {
        let overview = cluster_nav()[0].links[0];
        let state = NavState::from_id(Some("abc"));
        assert_eq!(overview.href("/clusters/", &state), "/clusters/?id=abc");
    }

    #[test]
    fn is_active_ignores_query() {
        let groups = cluster_nav();
        let overview = groups[0].links[0];
        let logs = groups[0].links[1];
        assert!(overview.is_active(CLUSTER_BASE_PATH, "/clusters/?id=abc"));
        assert!(overview.is_active(CLUSTER_BASE_PATH, "/clusters"));
        assert!(!overview.is_active(CLUSTER_BASE_PATH, "/clusters/logs"));
        assert!(logs.is_active(CLUSTER_BASE_PATH, "/clusters/logs?id=abc"));
    }
}
