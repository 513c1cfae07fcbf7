//! Prodcat application module: terminal lifecycle and the event loop.

/// Event loop driving rendering and key handling.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
