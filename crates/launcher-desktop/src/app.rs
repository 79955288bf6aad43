//! Main application component

use std::collections::HashMap;

use dioxus::prelude::*;

use launcher_core::config::DesktopConfig;
use launcher_core::models::Settings;

use crate::routes::Route;
use crate::state::AppState;
use crate::styles::APP_STYLES;
use crate::theme::resolve_theme;

/// Root application component
#[component]
pub fn App() -> Element {
    let desktop_config = try_use_context::<DesktopConfig>().unwrap_or_default();
    let initial_theme = desktop_config.theme;

    // State signals
    let settings = use_signal(|| Settings {
        theme: initial_theme,
        ..Settings::default()
    });
    let theme = use_signal(|| resolve_theme(initial_theme));
    let cluster_overrides = use_signal(HashMap::new);

    use_context_provider(|| AppState {
        settings,
        theme,
        cluster_overrides,
    });

    let current_theme = theme();
    let palette = current_theme.palette().css_variables();

    rsx! {
        style { {APP_STYLES} }

        div {
            class: "app-container",
            "data-theme": current_theme.as_attr(),
            style: "{palette}",

            Router::<Route> {}
        }
    }
}
