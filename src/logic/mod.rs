//! Core non-UI logic: joins, enrichment, filtering and sorting.

pub mod enrich;
pub mod filter;
pub mod join;
pub mod sort;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use enrich::build_enriched_products;
pub use filter::{
    apply_filters_and_sort_preserve_selection, filter_products, matches_category,
    matches_search, matches_user,
};
pub use join::{resolve_category, resolve_owner};
pub use sort::{cycle_sort, sort_products};
