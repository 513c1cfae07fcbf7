//! Integration tests for the derived product view over the bundled catalog.
//!
//! These drive the public `AppState` mutators and `logic` functions only, checking that
//! every change recomputes the view from the full product list.

use prodcat::catalog::{CatalogData, Category, Product, default_catalog};
use prodcat::logic::{build_enriched_products, filter_products};
use prodcat::state::{AppState, FilterCriteria, NO_FILTER, SortColumn, SortOrder};

fn app() -> AppState {
    AppState::new(default_catalog().expect("embedded catalog"))
}

fn names(app: &AppState) -> Vec<&str> {
    app.results.iter().map(|p| p.name()).collect()
}

#[test]
/// What: Default criteria show every product in catalog order
fn default_view_is_full_catalog() {
    let app = app();
    assert_eq!(app.results.len(), app.catalog.products.len());
    assert_eq!(app.results, app.enriched);
    assert!(app.criteria.is_unfiltered());
}

#[test]
/// What: User filter goes through category ownership
///
/// - Input: user 2 (Anna owns Grocery and Fruits)
/// - Output: Grocery and Fruits products, in catalog order
fn user_filter_matches_category_owner() {
    let mut app = app();
    app.set_user(2);
    assert_eq!(
        names(&app),
        vec!["Bread", "Eggs", "Sugar", "Sausage", "Cheese", "Banana", "Green Apple"]
    );
    assert!(app.results.iter().all(|p| p.owner_name() == "Anna"));
}

#[test]
/// What: A user owning no category yields an empty view
fn user_without_categories_is_empty() {
    let mut app = app();
    app.set_user(4);
    assert!(app.results.is_empty());
    app.set_user(NO_FILTER);
    assert_eq!(app.results.len(), app.enriched.len());
}

#[test]
/// What: Criteria combine conjunctively and loosening one widens the view again
fn criteria_are_conjunctive_and_recomputed_from_full_set() {
    let mut app = app();
    app.set_user(2);
    app.set_category(3);
    assert_eq!(names(&app), vec!["Banana", "Green Apple"]);
    app.set_search_text("APPLE");
    assert_eq!(names(&app), vec!["Green Apple"]);

    // Conflicting criteria: Anna does not own Drinks
    app.set_category(2);
    assert!(app.results.is_empty());

    // Loosening the category brings Anna's apple back
    app.set_category(NO_FILTER);
    assert_eq!(names(&app), vec!["Green Apple"]);
}

#[test]
/// What: Reset restores the full view and keeps the sort
fn reset_restores_full_view() {
    let mut app = app();
    app.set_sort(Some(SortOrder::asc(SortColumn::Name)));
    app.set_user(1);
    app.set_search_text("zzz");
    assert!(app.results.is_empty());
    app.reset_filters();
    assert!(app.criteria.is_unfiltered());
    assert_eq!(app.results.len(), app.enriched.len());
    assert_eq!(app.results[0].name(), "Banana");
    assert_eq!(app.sort, Some(SortOrder::asc(SortColumn::Name)));
}

#[test]
/// What: Filtering equals the intersection of single-criterion filters
fn filter_is_intersection_of_single_criteria() {
    let data = default_catalog().expect("embedded catalog");
    let enriched = build_enriched_products(&data);
    for user in [NO_FILTER, 1, 2, 3, 4] {
        for category in [NO_FILTER, 1, 2, 3, 4, 5] {
            for text in ["", "e", "an"] {
                let combined = filter_products(
                    &enriched,
                    &FilterCriteria {
                        selected_user_id: user,
                        selected_category_id: category,
                        search_text: text.to_string(),
                    },
                );
                let by_user = filter_products(
                    &enriched,
                    &FilterCriteria {
                        selected_user_id: user,
                        ..FilterCriteria::default()
                    },
                );
                let by_category = filter_products(
                    &enriched,
                    &FilterCriteria {
                        selected_category_id: category,
                        ..FilterCriteria::default()
                    },
                );
                let by_text = filter_products(
                    &enriched,
                    &FilterCriteria {
                        search_text: text.to_string(),
                        ..FilterCriteria::default()
                    },
                );
                let expected: Vec<_> = enriched
                    .iter()
                    .filter(|p| by_user.contains(p) && by_category.contains(p) && by_text.contains(p))
                    .cloned()
                    .collect();
                assert_eq!(combined, expected, "user={user} category={category} text={text:?}");
            }
        }
    }
}

#[test]
/// What: Dangling references survive enrichment and drop out of owner/category filters
fn dangling_references_are_kept_but_never_match_filters() {
    let data = CatalogData {
        users: Vec::new(),
        categories: vec![Category {
            id: 1,
            title: "Orphans".into(),
            icon: "?".into(),
            owner_id: 99,
        }],
        products: vec![
            Product {
                id: 1,
                name: "Lost".into(),
                category_id: 42,
            },
            Product {
                id: 2,
                name: "Unowned".into(),
                category_id: 1,
            },
        ],
    };
    let mut app = AppState::new(data);
    assert_eq!(app.results.len(), 2);
    assert_eq!(app.results[0].category_label(), "");
    assert_eq!(app.results[1].owner_name(), "");

    app.set_category(1);
    assert_eq!(names(&app), vec!["Unowned"]);
    app.set_category(NO_FILTER);
    app.set_user(99);
    assert_eq!(names(&app), vec!["Unowned"]);
    app.set_user(1);
    assert!(app.results.is_empty());
}
