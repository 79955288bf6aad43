//! Pages rendered inside the cluster layout

use dioxus::prelude::*;

use launcher_core::models::{Resolution, Settings};
use launcher_core::Icon;

use crate::components::{IconGlyph, SettingsRow, SettingsRowHeader, ToggleIndicator};
use crate::routes::{navigate_to, Route};
use crate::state::AppState;

const MEMORY_STEP_MB: u32 = 512;
const MEMORY_MIN_MB: u32 = 512;
const MEMORY_MAX_MB: u32 = 16_384;

const RESOLUTION_PRESETS: [Resolution; 3] = [
    Resolution {
        width: 854,
        height: 480,
    },
    Resolution {
        width: 1280,
        height: 720,
    },
    Resolution {
        width: 1920,
        height: 1080,
    },
];

fn cluster_label(id: &str) -> String {
    if id.is_empty() {
        "No cluster selected".to_string()
    } else {
        format!("Cluster {id}")
    }
}

/// Next memory maximum after one step up or down, kept within bounds.
fn step_memory(current: u32, increase: bool) -> u32 {
    let next = if increase {
        current.saturating_add(MEMORY_STEP_MB)
    } else {
        current.saturating_sub(MEMORY_STEP_MB)
    };
    next.clamp(MEMORY_MIN_MB, MEMORY_MAX_MB)
}

/// Deferred edit of a cluster's effective settings.
type SettingsEdit = Box<dyn FnOnce(&mut Settings)>;

/// Callback storing edits as overrides of cluster `id`.
fn use_cluster_editor(id: String) -> Callback<SettingsEdit> {
    let mut state = use_context::<AppState>();
    use_callback(move |change: SettingsEdit| state.edit_cluster(&id, change))
}

#[component]
pub fn ClusterOverview(id: String) -> Element {
    let label = cluster_label(&id);
    let game_id = id.clone();
    let process_id = id;

    rsx! {
        div {
            class: "settings-list",

            SettingsRowHeader { "Cluster" }
            SettingsRow {
                title: label,
                description: "Selected from the cluster list",
                icon: rsx! { IconGlyph { icon: Icon::Eye } },
            }

            SettingsRowHeader { "Configure" }
            SettingsRow {
                title: "Game settings",
                description: "Window size and fullscreen",
                icon: rsx! { IconGlyph { icon: Icon::Gamepad } },
                onclick: move |()| {
                    navigate_to(Route::ClusterGameSettings { id: game_id.clone() });
                },
            }
            SettingsRow {
                title: "Process settings",
                description: "Memory and launcher behavior",
                icon: rsx! { IconGlyph { icon: Icon::Cpu } },
                onclick: move |()| {
                    navigate_to(Route::ClusterProcessSettings { id: process_id.clone() });
                },
            }
        }
    }
}

/// Placeholder shown by sections whose content comes from a running cluster.
#[component]
fn EmptySection(
    icon: Icon,
    title: &'static str,
    description: &'static str,
    id: String,
) -> Element {
    rsx! {
        div {
            class: "settings-list",

            SettingsRowHeader { "{title}" }
            SettingsRow {
                title: cluster_label(&id),
                description: description,
                icon: rsx! { IconGlyph { icon: icon } },
            }
        }
    }
}

#[component]
pub fn ClusterLogs(id: String) -> Element {
    rsx! {
        EmptySection {
            icon: Icon::Terminal,
            title: "Logs",
            description: "Game output appears here once the cluster has been launched",
            id: id,
        }
    }
}

#[component]
pub fn ClusterMods(id: String) -> Element {
    rsx! {
        EmptySection {
            icon: Icon::Package,
            title: "Mods",
            description: "No mods installed",
            id: id,
        }
    }
}

#[component]
pub fn ClusterScreenshots(id: String) -> Element {
    rsx! {
        EmptySection {
            icon: Icon::Image,
            title: "Screenshots",
            description: "Screenshots taken in game show up here",
            id: id,
        }
    }
}

#[component]
pub fn ClusterWorlds(id: String) -> Element {
    rsx! {
        EmptySection {
            icon: Icon::Globe,
            title: "Worlds",
            description: "No saved worlds yet",
            id: id,
        }
    }
}

/// Shows whether the cluster has its own values, with a way back to defaults.
#[component]
fn OverrideStatus(id: String) -> Element {
    let mut state = use_context::<AppState>();
    let customized = state.is_cluster_customized(&id);
    let description = if id.is_empty() {
        "Select a cluster to change its settings"
    } else if customized {
        "This cluster has its own values. Click to use the launcher defaults"
    } else {
        "This cluster follows the launcher defaults"
    };

    rsx! {
        SettingsRowHeader { "Overrides" }
        if customized {
            SettingsRow {
                title: "Custom settings",
                description: description,
                icon: rsx! { IconGlyph { icon: Icon::Palette } },
                onclick: move |()| state.reset_cluster(&id),
                span { "Reset" }
            }
        } else {
            SettingsRow {
                title: "Launcher defaults",
                description: description,
                icon: rsx! { IconGlyph { icon: Icon::Palette } },
            }
        }
    }
}

#[component]
pub fn ClusterGameSettings(id: String) -> Element {
    let state = use_context::<AppState>();
    let settings = state.cluster_settings(&id);
    let current_resolution = settings.resolution;
    let fullscreen_description = format!("Start {} in fullscreen", cluster_label(&id));
    let edit = use_cluster_editor(id.clone());

    rsx! {
        div {
            class: "settings-list",

            SettingsRowHeader { "Game" }
            SettingsRow {
                title: "Fullscreen",
                description: fullscreen_description,
                icon: rsx! { IconGlyph { icon: Icon::Monitor } },
                onclick: move |()| {
                    edit.call(Box::new(|settings: &mut Settings| {
                        settings.force_fullscreen = !settings.force_fullscreen;
                    }));
                },
                ToggleIndicator { checked: settings.force_fullscreen }
            }
            SettingsRow {
                title: "Resolution",
                description: "Window size when not fullscreen",
                icon: rsx! { IconGlyph { icon: Icon::Monitor } },
                for preset in RESOLUTION_PRESETS {
                    button {
                        key: "{preset}",
                        class: if preset == current_resolution { "chip chip--selected" } else { "chip" },
                        onclick: move |_| {
                            edit.call(Box::new(move |settings: &mut Settings| {
                                settings.resolution = preset;
                            }));
                        },
                        "{preset}"
                    }
                }
            }

            OverrideStatus { id: id }
        }
    }
}

#[component]
pub fn ClusterProcessSettings(id: String) -> Element {
    let state = use_context::<AppState>();
    let settings = state.cluster_settings(&id);
    let memory = settings.memory;
    let memory_description = format!("Maximum heap for {}", cluster_label(&id));
    let memory_label = format!("{} MB", memory.maximum);
    let edit = use_cluster_editor(id.clone());

    rsx! {
        div {
            class: "settings-list",

            SettingsRowHeader { "Process" }
            SettingsRow {
                title: "Memory",
                description: memory_description,
                icon: rsx! { IconGlyph { icon: Icon::Memory } },
                button {
                    class: "chip",
                    disabled: memory.maximum <= MEMORY_MIN_MB,
                    onclick: move |_| {
                        edit.call(Box::new(|settings: &mut Settings| {
                            let maximum = step_memory(settings.memory.maximum, false);
                            settings.memory = settings.memory.with_maximum(maximum);
                        }));
                    },
                    "−"
                }
                span { "{memory_label}" }
                button {
                    class: "chip",
                    disabled: memory.maximum >= MEMORY_MAX_MB,
                    onclick: move |_| {
                        edit.call(Box::new(|settings: &mut Settings| {
                            let maximum = step_memory(settings.memory.maximum, true);
                            settings.memory = settings.memory.with_maximum(maximum);
                        }));
                    },
                    "+"
                }
            }

            SettingsRowHeader { "Launcher" }
            SettingsRow {
                title: "Hide on launch",
                description: "Hide the launcher while the game is running",
                icon: rsx! { IconGlyph { icon: Icon::Eye } },
                onclick: move |()| {
                    edit.call(Box::new(|settings: &mut Settings| {
                        settings.hide_on_launch = !settings.hide_on_launch;
                    }));
                },
                ToggleIndicator { checked: settings.hide_on_launch }
            }
            SettingsRow {
                title: "Close on exit",
                description: "Quit the launcher when the game exits",
                icon: rsx! { IconGlyph { icon: Icon::Cpu } },
                onclick: move |()| {
                    edit.call(Box::new(|settings: &mut Settings| {
                        settings.close_on_exit = !settings.close_on_exit;
                    }));
                },
                ToggleIndicator { checked: settings.close_on_exit }
            }

            OverrideStatus { id: id }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use launcher_core::models::ClusterOverrides;

    use super::*;
    use crate::theme::ResolvedTheme;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Provide state where cluster `abc` forces fullscreen and the defaults don't.
    fn provide_state() {
        let settings = use_signal(Settings::default);
        let theme = use_signal(|| ResolvedTheme::Light);
        let cluster_overrides = use_signal(|| {
            HashMap::from([(
                "abc".to_string(),
                ClusterOverrides {
                    force_fullscreen: Some(true),
                    ..ClusterOverrides::default()
                },
            )])
        });
        use_context_provider(|| AppState {
            settings,
            theme,
            cluster_overrides,
        });
    }

    #[test]
    fn game_page_shows_the_clusters_own_values() {
        let html = render(|| {
            provide_state();
            rsx! { ClusterGameSettings { id: "abc".to_string() } }
        });

        assert!(html.contains("Start Cluster abc in fullscreen"));
        assert!(html.contains(r#"aria-checked="true""#));
        assert!(html.contains("Custom settings"));
    }

    #[test]
    fn game_page_of_another_cluster_uses_defaults() {
        let html = render(|| {
            provide_state();
            rsx! { ClusterGameSettings { id: "xyz".to_string() } }
        });

        assert!(html.contains(r#"aria-checked="false""#));
        assert!(!html.contains(r#"aria-checked="true""#));
        assert!(html.contains("This cluster follows the launcher defaults"));
    }

    #[test]
    fn process_page_without_cluster_asks_for_one() {
        let html = render(|| {
            provide_state();
            rsx! { ClusterProcessSettings { id: String::new() } }
        });

        assert!(html.contains("Maximum heap for No cluster selected"));
        assert!(html.contains("Select a cluster to change its settings"));
    }

    #[test]
    fn cluster_label_handles_missing_id() {
        assert_eq!(cluster_label(""), "No cluster selected");
        assert_eq!(cluster_label("abc"), "Cluster abc");
    }

    #[test]
    fn step_memory_stays_in_bounds() {
        assert_eq!(step_memory(2048, true), 2560);
        assert_eq!(step_memory(2048, false), 1536);
        assert_eq!(step_memory(MEMORY_MIN_MB, false), MEMORY_MIN_MB);
        assert_eq!(step_memory(MEMORY_MAX_MB, true), MEMORY_MAX_MB);
    }
}
