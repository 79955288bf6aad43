//! Per-cluster settings layered over the launcher defaults

use super::settings::{MemorySettings, Resolution, Settings};

/// Values a single cluster sets for itself.
///
/// Every `None` field follows the launcher-wide [`Settings`], so changing a
/// default reaches every cluster that never touched that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusterOverrides {
    pub force_fullscreen: Option<bool>,
    pub resolution: Option<Resolution>,
    pub memory: Option<MemorySettings>,
    pub hide_on_launch: Option<bool>,
    pub close_on_exit: Option<bool>,
}

impl ClusterOverrides {
    /// Settings the cluster actually runs with.
    pub fn resolve(&self, defaults: &Settings) -> Settings {
        Settings {
            force_fullscreen: self.force_fullscreen.unwrap_or(defaults.force_fullscreen),
            resolution: self.resolution.unwrap_or(defaults.resolution),
            memory: self.memory.unwrap_or(defaults.memory),
            hide_on_launch: self.hide_on_launch.unwrap_or(defaults.hide_on_launch),
            close_on_exit: self.close_on_exit.unwrap_or(defaults.close_on_exit),
            ..defaults.clone()
        }
    }

    /// Overrides that turn `defaults` into `effective`.
    ///
    /// Fields equal to the default are left unset. The theme is launcher-wide
    /// and never part of an override.
    pub fn diff(defaults: &Settings, effective: &Settings) -> Self {
        fn changed<T: PartialEq + Copy>(default: T, effective: T) -> Option<T> {
            (default != effective).then_some(effective)
        }

        Self {
            force_fullscreen: changed(defaults.force_fullscreen, effective.force_fullscreen),
            resolution: changed(defaults.resolution, effective.resolution),
            memory: changed(defaults.memory, effective.memory),
            hide_on_launch: changed(defaults.hide_on_launch, effective.hide_on_launch),
            close_on_exit: changed(defaults.close_on_exit, effective.close_on_exit),
        }
    }

    /// Whether the cluster follows the defaults completely.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::ThemeMode;

    #[test]
    fn empty_overrides_follow_defaults() {
        let defaults = Settings {
            force_fullscreen: true,
            ..Settings::default()
        };
        assert_eq!(ClusterOverrides::default().resolve(&defaults), defaults);
        assert!(ClusterOverrides::default().is_empty());
    }

    #[test]
    fn set_fields_win_over_defaults() {
        let defaults = Settings::default();
        let overrides = ClusterOverrides {
            force_fullscreen: Some(true),
            memory: Some(MemorySettings {
                minimum: 512,
                maximum: 4096,
            }),
            ..ClusterOverrides::default()
        };

        let effective = overrides.resolve(&defaults);
        assert!(effective.force_fullscreen);
        assert_eq!(effective.memory.maximum, 4096);
        assert_eq!(effective.resolution, defaults.resolution);
        assert_eq!(effective.close_on_exit, defaults.close_on_exit);
    }

    #[test]
    fn unset_fields_track_later_default_changes() {
        let overrides = ClusterOverrides {
            hide_on_launch: Some(true),
            ..ClusterOverrides::default()
        };
        let defaults = Settings {
            close_on_exit: true,
            ..Settings::default()
        };

        let effective = overrides.resolve(&defaults);
        assert!(effective.close_on_exit);
        assert!(effective.hide_on_launch);
    }

    #[test]
    fn theme_always_comes_from_defaults() {
        let defaults = Settings {
            theme: ThemeMode::Dark,
            ..Settings::default()
        };
        assert_eq!(
            ClusterOverrides::default().resolve(&defaults).theme,
            ThemeMode::Dark
        );
    }

    #[test]
    fn diff_keeps_only_changed_fields() {
        let defaults = Settings::default();
        let effective = Settings {
            force_fullscreen: !defaults.force_fullscreen,
            theme: ThemeMode::Light,
            ..defaults.clone()
        };

        let overrides = ClusterOverrides::diff(&defaults, &effective);
        assert_eq!(
            overrides,
            ClusterOverrides {
                force_fullscreen: Some(!defaults.force_fullscreen),
                ..ClusterOverrides::default()
            }
        );
        assert!(ClusterOverrides::diff(&defaults, &defaults).is_empty());
    }
}
