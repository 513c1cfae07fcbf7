//! Criterion mutators and navigation helpers for `AppState`.
//!
//! Each criterion mutator is one discrete event: it updates a single field and
//! then re-runs the filter engine over the full enriched list.

use crate::catalog::{EnrichedProduct, RecordId};
use crate::logic::apply_filters_and_sort_preserve_selection;
use crate::state::app_state::AppState;
use crate::state::types::{NO_FILTER, SortColumn, SortOrder};

impl AppState {
    /// Select an owning user (`0` clears the user filter) and recompute.
    pub fn set_user(&mut self, user_id: RecordId) {
        self.criteria.selected_user_id = user_id;
        apply_filters_and_sort_preserve_selection(self);
    }

    /// Select a category (`0` clears the category filter) and recompute.
    pub fn set_category(&mut self, category_id: RecordId) {
        self.criteria.selected_category_id = category_id;
        apply_filters_and_sort_preserve_selection(self);
    }

    /// Replace the search text and recompute.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        apply_filters_and_sort_preserve_selection(self);
    }

    /// Append one character to the search text and recompute.
    pub fn push_search_char(&mut self, ch: char) {
        self.criteria.search_text.push(ch);
        apply_filters_and_sort_preserve_selection(self);
    }

    /// What: Delete the last character of the search text.
    ///
    /// Output:
    /// - `true` when a character was removed (and the list recomputed); `false` when already empty.
    pub fn pop_search_char(&mut self) -> bool {
        if self.criteria.search_text.pop().is_none() {
            return false;
        }
        apply_filters_and_sort_preserve_selection(self);
        true
    }

    /// Clear only the search text and recompute.
    pub fn clear_search(&mut self) {
        self.set_search_text(String::new());
    }

    /// What: Reset all three criteria to their unfiltered defaults.
    ///
    /// Output:
    /// - Criteria equal `FilterCriteria::default()`; `results` recomputed once.
    ///
    /// Details:
    /// - The sort selection is a display preference and is left as-is.
    pub fn reset_filters(&mut self) {
        self.criteria.reset();
        tracing::debug!("filters reset");
        apply_filters_and_sort_preserve_selection(self);
    }

    /// Replace the sort selection and reorder the current results.
    pub fn set_sort(&mut self, sort: Option<SortOrder>) {
        self.sort = sort;
        apply_filters_and_sort_preserve_selection(self);
    }

    /// Advance the sort cycle for `column` (asc, desc, none).
    pub fn cycle_sort(&mut self, column: SortColumn) {
        self.set_sort(crate::logic::cycle_sort(self.sort, column));
    }

    /// What: Step the user selection through `All` and every user.
    ///
    /// Inputs:
    /// - `forward`: `true` for the next user, `false` for the previous one.
    ///
    /// Details:
    /// - Wraps around; an unknown current id is treated as `All`.
    pub fn cycle_user(&mut self, forward: bool) {
        let ids: Vec<RecordId> = self.catalog.users.iter().map(|u| u.id).collect();
        let next = step_selection(&ids, self.criteria.selected_user_id, forward);
        self.set_user(next);
    }

    /// Step the category selection through `All` and every category.
    pub fn cycle_category(&mut self, forward: bool) {
        let ids: Vec<RecordId> = self.catalog.categories.iter().map(|c| c.id).collect();
        let next = step_selection(&ids, self.criteria.selected_category_id, forward);
        self.set_category(next);
    }

    /// What: Move the table highlight by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            self.selected = 0;
            self.table_state.select(None);
            return;
        }
        let last = self.results.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.table_state.select(Some(self.selected));
    }

    /// Currently highlighted product, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&EnrichedProduct> {
        self.results.get(self.selected)
    }
}

/// What: Next id in the ring `[All, ids...]`.
///
/// Inputs:
/// - `ids`: Ids in display order.
/// - `current`: Current selection, [`NO_FILTER`] for `All`.
/// - `forward`: Direction.
///
/// Output:
/// - Neighbouring id, or [`NO_FILTER`] when stepping onto `All`.
fn step_selection(ids: &[RecordId], current: RecordId, forward: bool) -> RecordId {
    // Position 0 is "All"; ids occupy 1..=len.
    let ring = ids.len() + 1;
    let pos = ids.iter().position(|&id| id == current).map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % ring
    } else {
        (pos + ring - 1) % ring
    };
    if next == 0 { NO_FILTER } else { ids[next - 1] }
}
