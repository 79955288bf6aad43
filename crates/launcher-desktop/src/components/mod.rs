//! UI Components
//!
//! Reusable UI components for the desktop application.

mod icon;
mod row;
mod sidebar;
mod toggle;
mod transition;

pub use icon::IconGlyph;
pub use row::{SettingsRow, SettingsRowHeader};
pub use sidebar::Sidebar;
pub use toggle::ToggleIndicator;
pub use transition::RouteTransition;
