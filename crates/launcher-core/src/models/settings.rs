//! Launcher settings model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(Error::InvalidInput(format!(
                "unknown theme '{other}', expected light, dark or system"
            ))),
        }
    }
}

/// JVM heap bounds in megabytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySettings {
    pub minimum: u32,
    pub maximum: u32,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            minimum: 1024,
            maximum: 2048,
        }
    }
}

impl MemorySettings {
    /// Replace the maximum, pulling the minimum down with it when needed.
    #[must_use]
    pub fn with_maximum(self, maximum: u32) -> Self {
        Self {
            minimum: self.minimum.min(maximum),
            maximum,
        }
    }
}

/// Game window resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u16,
    pub height: u16,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 854,
            height: 480,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Launcher settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Theme mode
    pub theme: ThemeMode,
    /// Hide the launcher window while a game is running
    pub hide_on_launch: bool,
    /// Close the launcher when the game exits
    pub close_on_exit: bool,
    /// Start games in fullscreen
    pub force_fullscreen: bool,
    /// Game window size when not fullscreen
    pub resolution: Resolution,
    /// JVM memory bounds
    pub memory: MemorySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            hide_on_launch: false,
            close_on_exit: false,
            force_fullscreen: false,
            resolution: Resolution::default(),
            memory: MemorySettings::default(),
        }
    }
}
