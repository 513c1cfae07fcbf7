//! Config and log directory resolution.

use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "prodcat";
/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "settings.conf";

/// What: Candidate config directories in priority order.
///
/// Inputs:
/// - `home`: Value of `$HOME`, if set.
/// - `xdg_config`: Value of `$XDG_CONFIG_HOME`, if set.
///
/// Output:
/// - `$HOME/.config/prodcat` first, then `$XDG_CONFIG_HOME/prodcat`; blank values are skipped.
fn candidate_dirs(home: Option<&str>, xdg_config: Option<&str>) -> Vec<PathBuf> {
    let home = home
        .filter(|h| !h.trim().is_empty())
        .map(|h| Path::new(h).join(".config").join(APP_DIR));
    let xdg = xdg_config
        .filter(|x| !x.trim().is_empty())
        .map(|x| Path::new(x).join(APP_DIR));
    home.into_iter().chain(xdg).collect()
}

/// Current `(HOME, XDG_CONFIG_HOME)` environment values.
fn env_bases() -> (Option<String>, Option<String>) {
    (env::var("HOME").ok(), env::var("XDG_CONFIG_HOME").ok())
}

/// First existing `settings.conf` among the candidate config directories.
pub fn resolve_settings_config_path() -> Option<PathBuf> {
    let (home, xdg) = env_bases();
    candidate_dirs(home.as_deref(), xdg.as_deref())
        .into_iter()
        .map(|d| d.join(SETTINGS_FILE))
        .find(|p| p.is_file())
}

/// Config directory for prodcat (ensured to exist).
///
/// Falls back to `./.config/prodcat` when neither `HOME` nor `XDG_CONFIG_HOME` is usable.
#[must_use]
pub fn config_dir() -> PathBuf {
    let (home, xdg) = env_bases();
    let candidates = candidate_dirs(home.as_deref(), xdg.as_deref());
    for dir in &candidates {
        if std::fs::create_dir_all(dir).is_ok() {
            return dir.clone();
        }
    }
    let dir = Path::new(".config").join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/prodcat/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
