//! Icon names referenced by navigation and settings rows

use serde::{Deserialize, Serialize};

/// A named icon from the launcher's icon set.
///
/// Core code only refers to icons by name; the desktop crate decides how each
/// one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Eye,
    Terminal,
    Package,
    Image,
    Globe,
    Gamepad,
    Cpu,
    Monitor,
    Memory,
    Palette,
    Home,
}

impl Icon {
    /// Stable kebab-case name, used for CSS classes and accessibility labels.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eye => "eye",
            Self::Terminal => "terminal",
            Self::Package => "package",
            Self::Image => "image",
            Self::Globe => "globe",
            Self::Gamepad => "gamepad",
            Self::Cpu => "cpu",
            Self::Monitor => "monitor",
            Self::Memory => "memory",
            Self::Palette => "palette",
            Self::Home => "home",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matches_serde_representation() {
        for icon in [Icon::Eye, Icon::Gamepad, Icon::Cpu, Icon::Home] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
        }
    }
}
