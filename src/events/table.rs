//! Keys for the product table: movement and column sort.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, SortColumn};

/// Rows moved by `PageUp`/`PageDown`.
const PAGE_ROWS: isize = 10;

/// What: Handle a key while the product table has focus.
///
/// Details:
/// - Arrow/page keys move the highlight; `Home`/`End` jump to the ends.
/// - `1`-`4` cycle the sort on ID, Product, Category and User.
pub(super) fn handle_table_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_ROWS),
        KeyCode::PageDown => app.move_selection(PAGE_ROWS),
        KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::End => app.move_selection(isize::MAX),
        KeyCode::Char('1') => app.cycle_sort(SortColumn::Id),
        KeyCode::Char('2') => app.cycle_sort(SortColumn::Name),
        KeyCode::Char('3') => app.cycle_sort(SortColumn::Category),
        KeyCode::Char('4') => app.cycle_sort(SortColumn::User),
        _ => {}
    }
}
