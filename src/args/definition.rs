//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::RecordId;
use crate::state::{AppState, SortOrder};
use crate::theme::Settings;

/// prodcat - browse a product catalog filtered by owner, category and name
#[derive(Parser, Debug, Default)]
#[command(name = "prodcat")]
#[command(version)]
#[command(about = "Browse a product catalog filtered by owner, category and name", long_about = None)]
pub struct Args {
    /// Catalog JSON file with users, categories and products (default: settings, then built-in sample)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Only show products whose category is owned by this user id (0 = all users)
    #[arg(short, long, allow_negative_numbers = true)]
    pub user: Option<RecordId>,

    /// Only show products in this category id (0 = all categories)
    #[arg(short, long, allow_negative_numbers = true)]
    pub category: Option<RecordId>,

    /// Only show products whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort the list: `none`, `id`, `id_desc`, `name`, `name_desc`, `category`, `category_desc`, `user`, `user_desc`
    #[arg(long)]
    pub sort: Option<String>,

    /// Print the filtered list and exit instead of starting the TUI
    #[arg(short, long)]
    pub list: bool,

    /// Print the list as JSON (use with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Pick the catalog file to load.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - `--data` when given, else `data_path` from settings, else `None` (embedded sample).
#[must_use]
pub fn resolve_data_path(args: &Args, settings: &Settings) -> Option<PathBuf> {
    args.data.clone().or_else(|| settings.data_path.clone())
}

/// What: Seed the initial view from settings and command-line criteria.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings (display preferences and default sort).
/// - `app`: Freshly built state.
///
/// Output:
/// - `Ok(())`, or `Err(message)` for an unrecognized `--sort` value.
///
/// # Errors
/// - Returns `Err` when `--sort` is not one of the known sort keys
///
/// Details:
/// - Criteria go through the same mutators as interactive input, so each one triggers a
///   recompute from the full product list.
/// - `--sort` overrides `sort_mode` from settings.
pub fn apply_args(args: &Args, settings: &Settings, app: &mut AppState) -> Result<(), String> {
    app.owner_colors = settings.owner_colors;
    app.show_keybinds_footer = settings.show_keybinds_footer;

    let sort = match args.sort.as_deref() {
        Some(key) => SortOrder::from_config_key(key)
            .ok_or_else(|| format!("unknown sort '{key}'"))?,
        None => settings.sort,
    };
    if sort.is_some() {
        app.set_sort(sort);
    }
    if let Some(user) = args.user {
        app.set_user(user);
    }
    if let Some(category) = args.category {
        app.set_category(category);
    }
    if let Some(text) = &args.search {
        app.set_search_text(text.clone());
    }
    tracing::info!(
        user = app.criteria.selected_user_id,
        category = app.criteria.selected_category_id,
        search = %app.criteria.search_text,
        sort = SortOrder::as_config_key(app.sort),
        "initial criteria"
    );
    Ok(())
}
