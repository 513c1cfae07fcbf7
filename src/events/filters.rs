//! Keys for the user and category rows.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, NO_FILTER};

/// Handle a key while the user tabs have focus: `Left`/`Right` step, `Home` selects `All`.
pub(super) fn handle_users_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Left => app.cycle_user(false),
        KeyCode::Right => app.cycle_user(true),
        KeyCode::Home => app.set_user(NO_FILTER),
        _ => {}
    }
}

/// Handle a key while the category buttons have focus: `Left`/`Right` step, `Home` selects `All`.
pub(super) fn handle_categories_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Left => app.cycle_category(false),
        KeyCode::Right => app.cycle_category(true),
        KeyCode::Home => app.set_category(NO_FILTER),
        _ => {}
    }
}
