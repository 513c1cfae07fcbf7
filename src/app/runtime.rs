//! Synchronous draw/read/dispatch loop.

use std::io::Stdout;

use ratatui::{
    Terminal,
    backend::{CrosstermBackend, TestBackend},
};

use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Size of the off-screen buffer used in headless mode.
const HEADLESS_SIZE: (u16, u16) = (120, 40);

/// What: Run the prodcat TUI until the user quits.
///
/// Inputs:
/// - `app`: Fully initialized state (catalog loaded, CLI criteria applied).
/// - `headless`: When `true`, render a single frame off-screen and return without touching the TTY.
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` on terminal I/O failures.
///
/// # Errors
/// - Returns `Err` when raw mode or the alternate screen cannot be entered
/// - Returns `Err` when drawing a frame or reading a terminal event fails
///
/// Details:
/// - Every key event goes through [`crate::events::handle_event`], which mutates criteria via
///   `AppState` methods; those recompute `results` before the next frame is drawn.
/// - The terminal is restored even when the loop fails.
pub fn run(mut app: AppState, headless: bool) -> Result<()> {
    if headless {
        let (w, h) = HEADLESS_SIZE;
        let mut terminal = Terminal::new(TestBackend::new(w, h))?;
        terminal.draw(|f| ui(f, &mut app))?;
        tracing::info!(shown = app.results.len(), "headless frame rendered");
        return Ok(());
    }

    setup_terminal()?;
    let outcome = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(mut terminal) => event_loop(&mut terminal, &mut app),
        Err(e) => Err(e.into()),
    };
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    tracing::info!("prodcat exited");
    outcome
}

/// Draw, block on the next terminal event, dispatch it; repeat until a handler asks to quit.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;
        let ev = crossterm::event::read()?;
        if crate::events::handle_event(&ev, app) {
            return Ok(());
        }
    }
}
