//! launcher-core - Core library for Launcher
//!
//! This crate contains the framework-free pieces shared by the desktop shell:
//! the cluster navigation table, the launcher settings model with per-cluster
//! overrides, program info, and desktop configuration loading.

pub mod config;
pub mod error;
pub mod icon;
pub mod models;
pub mod nav;
pub mod util;

pub use error::{Error, Result};
pub use icon::Icon;
pub use nav::{cluster_nav, NavGroup, NavLink, NavState, CLUSTER_BASE_PATH};
