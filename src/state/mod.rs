//! Application state: filter criteria, sort selection and the live result list.
//!
//! Public re-exports keep the `crate::state::*` paths short.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{FilterCriteria, Focus, NO_FILTER, SortColumn, SortDirection, SortOrder};
