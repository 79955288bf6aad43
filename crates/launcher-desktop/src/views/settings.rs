//! App-wide settings view

use dioxus::prelude::*;

use launcher_core::models::{ProgramInfo, ThemeMode};
use launcher_core::Icon;

use crate::components::{IconGlyph, SettingsRow, SettingsRowHeader, ToggleIndicator};
use crate::state::AppState;

/// Theme options in display order
const THEME_OPTIONS: &[(ThemeMode, &str, &str)] = &[
    (ThemeMode::System, "System", "Follow the operating system"),
    (ThemeMode::Light, "Light", "Always use the light palette"),
    (ThemeMode::Dark, "Dark", "Always use the dark palette"),
];

/// Settings view component
#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.settings)();
    let resolution = current.resolution.to_string();
    let memory = format!(
        "{} – {} MB",
        current.memory.minimum, current.memory.maximum
    );

    rsx! {
        div {
            class: "settings-list",
            style: "padding: 24px;",

            SettingsRowHeader { "Appearance" }
            for (mode, label, description) in THEME_OPTIONS.iter().copied() {
                SettingsRow {
                    key: "{label}",
                    title: label,
                    description: description,
                    icon: rsx! { IconGlyph { icon: Icon::Palette } },
                    onclick: move |()| {
                        let mut next = state.settings.peek().clone();
                        next.theme = mode;
                        state.update_settings(next);
                    },
                    ToggleIndicator { checked: current.theme == mode }
                }
            }

            SettingsRowHeader { "Defaults" }
            SettingsRow {
                title: "Resolution",
                description: "Used by clusters without their own setting",
                icon: rsx! { IconGlyph { icon: Icon::Monitor } },
                span { "{resolution}" }
            }
            SettingsRow {
                title: "Memory",
                description: "Minimum and maximum JVM heap",
                icon: rsx! { IconGlyph { icon: Icon::Memory } },
                span { "{memory}" }
            }

            AboutSection { info: ProgramInfo::current() }
        }
    }
}

/// Version and platform of the running launcher
#[component]
fn AboutSection(info: ProgramInfo) -> Element {
    let version = format!("v{}", info.launcher_version);
    let platform = format!("{} ({})", info.platform, info.arch);

    rsx! {
        SettingsRowHeader { "About" }
        SettingsRow {
            title: "Launcher version",
            description: info.build_kind(),
            icon: rsx! { IconGlyph { icon: Icon::Package } },
            span { "{version}" }
        }
        SettingsRow {
            title: "Platform",
            description: "Operating system and architecture",
            icon: rsx! { IconGlyph { icon: Icon::Monitor } },
            span { "{platform}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn about_section_lists_version_and_platform() {
        let html = render(|| {
            rsx! {
                AboutSection {
                    info: ProgramInfo {
                        launcher_version: "1.2.3",
                        platform: "linux",
                        arch: "x86_64",
                        dev_build: true,
                    },
                }
            }
        });

        assert!(html.contains("About"));
        assert!(html.contains("v1.2.3"));
        assert!(html.contains("Development build"));
        assert!(html.contains("linux (x86_64)"));
    }

    #[test]
    fn about_rows_are_not_clickable() {
        let html = render(|| rsx! { AboutSection { info: ProgramInfo::current() } });

        assert!(html.contains(env!("CARGO_PKG_VERSION")));
        assert!(!html.contains("settings-row--interactive"));
    }
}
