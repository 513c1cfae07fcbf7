//! Settings file skeleton and first-run creation.

use std::fs;
use std::path::{Path, PathBuf};

/// Commented default `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# prodcat settings
# Lines are `key = value`; `#` starts a comment.

# Catalog JSON file with `users`, `categories` and `products` arrays.
# Leave empty to use the built-in sample catalog.
data_path =

# Initial sort: none, id, id_desc, name, name_desc, category, category_desc, user, user_desc
sort_mode = none

# Colour owner names by sex (true/false)
owner_colors = true

# Show the key hints under the table (true/false)
show_keybinds_footer = true
";

/// What: Write the settings skeleton if no settings file exists yet.
///
/// Inputs:
/// - `dir`: Config directory that should hold `settings.conf`.
///
/// Output:
/// - Path of the settings file, whether it was just created or already present.
///
/// Details:
/// - Write failures are logged and otherwise ignored; defaults apply in that case.
#[must_use]
pub fn ensure_settings_file(dir: &Path) -> PathBuf {
    let path = dir.join("settings.conf");
    if !path.exists() {
        if let Err(e) = fs::create_dir_all(dir).and_then(|()| fs::write(&path, SETTINGS_SKELETON_CONTENT))
        {
            tracing::warn!(path = %path.display(), error = %e, "failed to write settings skeleton");
        } else {
            tracing::info!(path = %path.display(), "wrote default settings skeleton");
        }
    }
    path
}
