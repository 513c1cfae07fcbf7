//! Configuration and colour palette for prodcat.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Settings file skeleton and first-run creation.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading and parsing.
pub mod settings;
/// Theme and settings type definitions.
mod types;

pub use config::{SETTINGS_SKELETON_CONTENT, ensure_settings_file};
pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use types::{Settings, Theme};

/// Return the application's colour palette.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
