//! Home view - landing screen

use dioxus::prelude::*;

use launcher_core::Icon;

use crate::components::{IconGlyph, SettingsRow, SettingsRowHeader};
use crate::routes::{navigate_to, Route};

/// Home view component - the launcher's landing screen
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "padding: 24px;",

            div {
                class: "settings-list",

                SettingsRowHeader { "Launcher" }
                SettingsRow {
                    title: "Clusters",
                    description: "Browse logs, mods, worlds and per-cluster settings",
                    icon: rsx! { IconGlyph { icon: Icon::Home } },
                    onclick: move |()| {
                        navigate_to(Route::ClusterOverview { id: String::new() });
                    },
                }
                SettingsRow {
                    title: "Settings",
                    description: "Appearance and launcher defaults",
                    icon: rsx! { IconGlyph { icon: Icon::Palette } },
                    onclick: move |()| {
                        navigate_to(Route::Settings {});
                    },
                }
            }
        }
    }
}
