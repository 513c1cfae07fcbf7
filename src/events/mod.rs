//! Event handling layer for the prodcat TUI.
//!
//! Global shortcuts are handled here; focus-specific keys are delegated to
//! submodules. Every key that changes a criterion calls exactly one
//! `AppState` mutator, which recomputes the product list.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus};

mod filters;
mod search;
mod table;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app),
        _ => false,
    }
}

/// What: Handle one key press.
///
/// Inputs:
/// - `ke`: Key event (press only).
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` when the application should exit.
///
/// Details:
/// - `Ctrl+C` quits, `Ctrl+R` resets all filters, `Tab`/`Shift+Tab` cycle focus.
/// - `Esc` clears a non-empty search first and only quits on a second press.
fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('r') => {
                app.reset_filters();
                return false;
            }
            _ => {}
        }
    }
    match ke.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return false;
        }
        KeyCode::Esc => {
            if app.criteria.search_text.is_empty() {
                return true;
            }
            app.clear_search();
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app),
        Focus::Users => filters::handle_users_key(ke, app),
        Focus::Categories => filters::handle_categories_key(ke, app),
        Focus::Table => table::handle_table_key(ke, app),
    }
    false
}
