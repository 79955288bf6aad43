//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::collections::HashMap;

use dioxus::prelude::*;

use launcher_core::models::{ClusterOverrides, Settings};

use crate::theme::{resolve_theme, ResolvedTheme};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Launcher settings, kept in memory for the session
    pub settings: Signal<Settings>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Per-cluster overrides keyed by cluster id
    pub cluster_overrides: Signal<HashMap<String, ClusterOverrides>>,
}

impl AppState {
    /// Apply new settings, re-resolving the theme when its mode changed.
    pub fn update_settings(&mut self, new_settings: Settings) {
        let previous_mode = self.settings.peek().theme;
        if previous_mode != new_settings.theme {
            tracing::debug!(
                "Theme mode changed: {} -> {}",
                previous_mode.as_str(),
                new_settings.theme.as_str()
            );
            self.theme.set(resolve_theme(new_settings.theme));
        }
        self.settings.set(new_settings);
    }

    /// Settings cluster `id` runs with: its overrides over the defaults.
    pub fn cluster_settings(&self, id: &str) -> Settings {
        let defaults = self.settings.read();
        self.cluster_overrides
            .read()
            .get(id)
            .map_or_else(|| defaults.clone(), |overrides| overrides.resolve(&defaults))
    }

    /// Whether cluster `id` differs from the defaults anywhere.
    pub fn is_cluster_customized(&self, id: &str) -> bool {
        self.cluster_overrides
            .read()
            .get(id)
            .is_some_and(|overrides| !overrides.is_empty())
    }

    /// Apply `change` to the effective settings of cluster `id`.
    ///
    /// Only fields that end up differing from the defaults are stored. The
    /// launcher-wide settings are never touched; without a cluster id the
    /// change is dropped.
    pub fn edit_cluster(&mut self, id: &str, change: impl FnOnce(&mut Settings)) {
        if id.is_empty() {
            tracing::debug!("Ignoring cluster settings change with no cluster selected");
            return;
        }

        let defaults = self.settings.peek().clone();
        let mut effective = self
            .cluster_overrides
            .peek()
            .get(id)
            .map_or_else(|| defaults.clone(), |overrides| overrides.resolve(&defaults));
        change(&mut effective);

        let overrides = ClusterOverrides::diff(&defaults, &effective);
        tracing::debug!("Cluster {} overrides now {:?}", id, overrides);
        let mut all = self.cluster_overrides.write();
        if overrides.is_empty() {
            all.remove(id);
        } else {
            all.insert(id.to_string(), overrides);
        }
    }

    /// Drop every override of cluster `id`.
    pub fn reset_cluster(&mut self, id: &str) {
        if self.cluster_overrides.write().remove(id).is_some() {
            tracing::debug!("Cluster {} reset to launcher defaults", id);
        }
    }
}
