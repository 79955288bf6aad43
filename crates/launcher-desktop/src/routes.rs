//! Application routes

use dioxus::prelude::*;

use crate::views::cluster::{
    ClusterGameSettings, ClusterLogs, ClusterMods, ClusterOverview, ClusterProcessSettings,
    ClusterRoot, ClusterScreenshots, ClusterWorlds,
};
use crate::views::{Home, NotFound, Settings};

/// Every page of the launcher.
///
/// Cluster pages share the `ClusterRoot` layout and carry the selected
/// cluster as the `id` query parameter. A missing parameter parses as an
/// empty string.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[nest("/clusters")]
        #[layout(ClusterRoot)]
            #[route("/?:id")]
            ClusterOverview { id: String },
            #[route("/logs?:id")]
            ClusterLogs { id: String },
            #[route("/mods?:id")]
            ClusterMods { id: String },
            #[route("/screenshots?:id")]
            ClusterScreenshots { id: String },
            #[route("/worlds?:id")]
            ClusterWorlds { id: String },
            #[route("/settings/game?:id")]
            ClusterGameSettings { id: String },
            #[route("/settings/process?:id")]
            ClusterProcessSettings { id: String },
        #[end_layout]
    #[end_nest]

    #[route("/settings")]
    Settings {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Decoded `id` of a cluster page, or `None` outside the cluster section.
    pub fn cluster_id(&self) -> Option<&str> {
        match self {
            Self::ClusterOverview { id }
            | Self::ClusterLogs { id }
            | Self::ClusterMods { id }
            | Self::ClusterScreenshots { id }
            | Self::ClusterWorlds { id }
            | Self::ClusterGameSettings { id }
            | Self::ClusterProcessSettings { id } => Some(id),
            Self::Home {} | Self::Settings {} | Self::NotFound { .. } => None,
        }
    }
}

/// Push `target` onto the router history, logging when the router refuses it.
pub fn navigate_to(target: impl Into<IntoRoutable>) {
    if let Some(failure) = navigator().push(target) {
        tracing::warn!("Navigation failed: {:?}", failure);
    }
}
