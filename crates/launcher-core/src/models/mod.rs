//! Data models for Launcher

mod cluster;
mod program;
mod settings;

pub use cluster::ClusterOverrides;
pub use program::ProgramInfo;
pub use settings::{MemorySettings, Resolution, Settings, ThemeMode};
