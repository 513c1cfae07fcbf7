//! `settings.conf` parsing and loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::parsing::{parse_bool, strip_inline_comment};
use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::state::SortOrder;

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are normalized (lowercase, `.`/`-`/space to `_`); unknown keys are ignored.
/// - Unparseable values leave the current value untouched.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "data_path" | "data" | "catalog" => {
                settings.data_path = if val.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(val))
                };
            }
            "sort_mode" | "default_sort" => {
                if let Some(sort) = SortOrder::from_config_key(val) {
                    settings.sort = sort;
                } else {
                    tracing::warn!(value = %val, "unknown sort_mode in settings; keeping default");
                }
            }
            "owner_colors" | "color_owners" => {
                settings.owner_colors = parse_bool(val);
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                settings.show_keybinds_footer = parse_bool(val);
            }
            _ => {}
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::info!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// Load user settings from the config directory.
/// Falls back to `Settings::default()` when missing or invalid; writes a skeleton on first run.
#[must_use]
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return load_settings_from(&path);
    }
    let path = super::config::ensure_settings_file(&super::paths::config_dir());
    if path.is_file() {
        load_settings_from(&path)
    } else {
        Settings::default()
    }
}
