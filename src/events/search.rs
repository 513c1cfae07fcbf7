//! Keys for the search input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable application state.
///
/// Output: None (modifies app state in place).
///
/// Details:
/// - Printable characters append, `Backspace` deletes, `Ctrl+U` clears the input.
/// - `Up`/`Down` move the table highlight so results can be browsed while typing.
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => app.clear_search(),
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_search_char(ch);
        }
        KeyCode::Backspace => {
            app.pop_search_char();
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        _ => {}
    }
}
