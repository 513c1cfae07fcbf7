//! Optional column sort applied after filtering.

use std::cmp::Ordering;

use crate::catalog::EnrichedProduct;
use crate::state::{SortColumn, SortDirection, SortOrder};

/// What: Compare two optional text keys case-insensitively, absent last.
fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// What: Ascending comparison of two products on one column.
///
/// Details:
/// - Text columns ignore case; products missing the category/owner come after those having it.
fn cmp_column(a: &EnrichedProduct, b: &EnrichedProduct, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Id => a.id().cmp(&b.id()),
        SortColumn::Name => cmp_text(Some(a.name()), Some(b.name())),
        SortColumn::Category => cmp_text(
            a.category.as_ref().map(|c| c.title.as_str()),
            b.category.as_ref().map(|c| c.title.as_str()),
        ),
        SortColumn::User => cmp_text(
            a.owner.as_ref().map(|u| u.name.as_str()),
            b.owner.as_ref().map(|u| u.name.as_str()),
        ),
    }
}

/// What: Stable in-place sort of products by one column.
///
/// Inputs:
/// - `items`: Products to reorder.
/// - `order`: Column and direction.
///
/// Output:
/// - `items` reordered; equal keys keep their relative order in both directions.
pub fn sort_products(items: &mut [EnrichedProduct], order: SortOrder) {
    items.sort_by(|a, b| {
        let ord = cmp_column(a, b, order.column);
        match order.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// What: Next sort state when a column header is activated.
///
/// Inputs:
/// - `current`: Current sort, `None` for original order.
/// - `column`: Column that was activated.
///
/// Output:
/// - Ascending on a new column; ascending -> descending -> none on the same column.
#[must_use]
pub fn cycle_sort(current: Option<SortOrder>, column: SortColumn) -> Option<SortOrder> {
    match current {
        Some(o) if o.column == column && o.direction == SortDirection::Asc => {
            Some(SortOrder::desc(column))
        }
        Some(o) if o.column == column => None,
        _ => Some(SortOrder::asc(column)),
    }
}
