//! prodcat binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use clap::Parser;

use prodcat::args::{self, Args};
use prodcat::catalog::{self, CatalogData, CatalogError};
use prodcat::state::AppState;
use prodcat::theme;

/// Log timestamp formatter producing `YYYY-MM-DD-T HH:MM:SS` in local time.
struct ProdcatTimer;

impl tracing_subscriber::fmt::time::FormatTime for ProdcatTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer flushing for the lifetime of the process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `~/.config/prodcat/logs/prodcat.log`.
///
/// Inputs:
/// - `level`: Fallback filter when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to stderr if the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("prodcat.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ProdcatTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ProdcatTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

/// Load the catalog from `path`, or the embedded sample when no path is configured.
fn load(path: Option<&Path>) -> Result<CatalogData, CatalogError> {
    path.map_or_else(catalog::default_catalog, catalog::load_catalog)
}

fn main() {
    let cli = Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = theme::settings();
    let data_path = args::resolve_data_path(&cli, &settings);
    let data = match load(data_path.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("prodcat: {e}");
            tracing::error!(error = %e, "failed to load catalog");
            std::process::exit(1);
        }
    };
    catalog::log_issues(&catalog::validate_catalog(&data));

    let mut app = AppState::new(data);
    if let Err(msg) = args::apply_args(&cli, &settings, &mut app) {
        eprintln!("prodcat: {msg}");
        tracing::error!(error = %msg, "invalid arguments");
        std::process::exit(2);
    }

    if cli.list {
        args::list::handle_list(&app, cli.json);
    }

    let headless = std::env::var("PRODCAT_TEST_HEADLESS").ok().as_deref() == Some("1");
    tracing::info!(
        products = app.enriched.len(),
        shown = app.results.len(),
        headless,
        "prodcat starting"
    );
    if let Err(err) = prodcat::app::run(app, headless) {
        eprintln!("prodcat: {err}");
        tracing::error!(error = ?err, "Application error");
        std::process::exit(1);
    }
}
