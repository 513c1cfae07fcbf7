//! Central `AppState` container.

use ratatui::widgets::TableState;

use crate::catalog::{CatalogData, EnrichedProduct};
use crate::state::types::{FilterCriteria, Focus, SortOrder};

mod methods;

/// State shared by the event, logic and UI layers.
///
/// `catalog` and `enriched` are built once and only read afterwards. Every
/// criterion mutator recomputes `results` from the full `enriched` list.
#[derive(Debug)]
pub struct AppState {
    /// Reference data the view was built from.
    pub catalog: CatalogData,
    /// One enriched record per product, in catalog order. Never mutated after construction.
    pub enriched: Vec<EnrichedProduct>,
    /// Current filter criteria.
    pub criteria: FilterCriteria,
    /// Optional column sort applied after filtering.
    pub sort: Option<SortOrder>,
    /// Products currently displayed, derived from `enriched` + `criteria` + `sort`.
    pub results: Vec<EnrichedProduct>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// Table selection state for the product table.
    pub table_state: TableState,
    /// Which panel receives key input.
    pub focus: Focus,
    /// Colour owner names by sex.
    pub owner_colors: bool,
    /// Show the key hint line at the bottom.
    pub show_keybinds_footer: bool,
}

impl AppState {
    /// What: Build state over a catalog, running the enrichment pass once.
    ///
    /// Inputs:
    /// - `catalog`: Reference data, moved into the state.
    ///
    /// Output:
    /// - State with default criteria, no sort, and `results` equal to the full enriched list.
    #[must_use]
    pub fn new(catalog: CatalogData) -> Self {
        let enriched = crate::logic::build_enriched_products(&catalog);
        let mut app = Self {
            catalog,
            enriched,
            criteria: FilterCriteria::default(),
            sort: None,
            results: Vec::new(),
            selected: 0,
            table_state: TableState::default(),
            focus: Focus::default(),
            owner_colors: true,
            show_keybinds_footer: true,
        };
        crate::logic::apply_filters_and_sort_preserve_selection(&mut app);
        app
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CatalogData::default())
    }
}
