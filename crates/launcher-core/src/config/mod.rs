//! Desktop shell configuration.
//!
//! Values come from three layers, later layers winning:
//! built-in defaults, an optional `desktop.json` in the user's config
//! directory, then `LAUNCHER_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::ThemeMode;
use crate::util::normalize_text_option;

const CONFIG_DIR_NAME: &str = "launcher";
const CONFIG_FILE_NAME: &str = "desktop.json";

const MIN_WINDOW_WIDTH: u32 = 320;
const MIN_WINDOW_HEIGHT: u32 = 240;

pub const ENV_WINDOW_TITLE: &str = "LAUNCHER_WINDOW_TITLE";
pub const ENV_WINDOW_WIDTH: &str = "LAUNCHER_WINDOW_WIDTH";
pub const ENV_WINDOW_HEIGHT: &str = "LAUNCHER_WINDOW_HEIGHT";
pub const ENV_THEME: &str = "LAUNCHER_THEME";

/// Window and appearance settings for the desktop shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesktopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Initial theme before the user changes it in settings
    pub theme: ThemeMode,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            window_title: "Launcher".to_string(),
            window_width: 1200,
            window_height: 760,
            theme: ThemeMode::System,
        }
    }
}

impl DesktopConfig {
    /// Parse a config file body. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Apply environment overrides looked up through `lookup`.
    ///
    /// Blank values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| normalize_text_option(lookup(name));

        if let Some(title) = get(ENV_WINDOW_TITLE) {
            self.window_title = title;
        }
        if let Some(width) = get(ENV_WINDOW_WIDTH) {
            self.window_width = parse_dimension(ENV_WINDOW_WIDTH, &width)?;
        }
        if let Some(height) = get(ENV_WINDOW_HEIGHT) {
            self.window_height = parse_dimension(ENV_WINDOW_HEIGHT, &height)?;
        }
        if let Some(theme) = get(ENV_THEME) {
            self.theme = theme.parse()?;
        }

        self.validate()
    }

    fn validate(mut self) -> Result<Self> {
        self.window_title = normalize_text_option(Some(self.window_title))
            .ok_or_else(|| Error::Config("window_title must not be empty".to_string()))?;
        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(Error::Config(format!(
                "window size {}x{} is below the {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT} minimum",
                self.window_width, self.window_height
            )));
        }
        Ok(self)
    }
}

fn parse_dimension(name: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("{name} must be a positive integer, got '{value}'")))
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load config from `path` (when it exists) and the given env lookup.
pub fn load_desktop_config_from(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DesktopConfig> {
    let base = match path {
        Some(path) if path.exists() => {
            tracing::debug!("Reading desktop config from {}", path.display());
            DesktopConfig::from_json(&fs::read_to_string(path)?)?
        }
        _ => DesktopConfig::default(),
    };
    base.with_overrides(lookup)
}

/// Load config from the default path and the process environment.
///
/// If loading fails, this logs a warning and returns the default config so the
/// app can still start.
pub fn load_desktop_config() -> DesktopConfig {
    let path = default_config_path();
    load_desktop_config_from(path.as_deref(), |name| std::env::var(name).ok()).unwrap_or_else(
        |error| {
            tracing::warn!("Failed to load desktop config: {}", error);
            DesktopConfig::default()
        },
    )
}
