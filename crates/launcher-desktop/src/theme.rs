//! Theme resolution and palettes

use std::sync::OnceLock;

use launcher_core::models::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Value for the `data-theme` attribute on the app container
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Get the color palette for this theme
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Resolve theme mode to actual light/dark theme
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    resolve_theme_with(mode, is_system_dark_mode)
}

fn resolve_theme_with(mode: ThemeMode, system_dark: impl FnOnce() -> bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if system_dark() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    // AppsUseLightTheme is 0x0 in dark mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains("0x0"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").map_or_else(
        |_| {
            tracing::debug!("GTK_THEME not set, defaulting to light mode");
            false
        },
        |theme| theme.to_lowercase().contains("dark"),
    )
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode() -> bool {
    false
}

/// Colors exposed to the stylesheet as CSS custom properties
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_hover: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f4f5f7",
    bg_hover: "#e9ebef",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    border: "#dadce0",
    accent: "#16a34a",
    accent_text: "#ffffff",
    error: "#dc2626",
};

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#141414",
    bg_secondary: "#1e1e1e",
    bg_hover: "#2a2a2a",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    border: "#34373a",
    accent: "#4ade80",
    accent_text: "#101010",
    error: "#f87171",
};

impl ColorPalette {
    /// Inline `style` declaring the palette as CSS variables
    pub fn css_variables(&self) -> String {
        format!(
            "--bg-primary: {}; --bg-secondary: {}; --bg-hover: {}; \
             --text-primary: {}; --text-secondary: {}; --border: {}; \
             --accent: {}; --accent-text: {}; --error: {};",
            self.bg_primary,
            self.bg_secondary,
            self.bg_hover,
            self.text_primary,
            self.text_secondary,
            self.border,
            self.accent,
            self.accent_text,
            self.error,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_system_preference() {
        assert_eq!(
            resolve_theme_with(ThemeMode::Light, || true),
            ResolvedTheme::Light
        );
        assert_eq!(
            resolve_theme_with(ThemeMode::Dark, || false),
            ResolvedTheme::Dark
        );
    }

    #[test]
    fn system_mode_follows_preference() {
        assert_eq!(
            resolve_theme_with(ThemeMode::System, || true),
            ResolvedTheme::Dark
        );
        assert_eq!(
            resolve_theme_with(ThemeMode::System, || false),
            ResolvedTheme::Light
        );
    }

    #[test]
    fn css_variables_include_every_color() {
        let css = DARK_PALETTE.css_variables();
        assert!(css.contains("--bg-primary: #141414;"));
        assert!(css.contains("--error: #f87171;"));
    }
}
