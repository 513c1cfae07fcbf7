//! Filter engine: per-criterion predicates and the full recompute of the visible list.

use crate::catalog::{EnrichedProduct, RecordId};
use crate::logic::sort::sort_products;
use crate::state::{AppState, FilterCriteria};

/// What: Text predicate on the product name.
///
/// Inputs:
/// - `item`: Enriched product.
/// - `needle_lower`: Search text already lowercased.
///
/// Output:
/// - `true` when the lowercased name contains the needle; always `true` for an empty needle.
fn matches_search_lower(item: &EnrichedProduct, needle_lower: &str) -> bool {
    needle_lower.is_empty() || item.name().to_lowercase().contains(needle_lower)
}

/// What: Case-insensitive substring match of `search_text` against the product name.
///
/// Inputs:
/// - `item`: Enriched product.
/// - `search_text`: Raw search text (not trimmed).
///
/// Output:
/// - `true` when the name contains the text ignoring case, or the text is empty.
#[must_use]
pub fn matches_search(item: &EnrichedProduct, search_text: &str) -> bool {
    matches_search_lower(item, &search_text.to_lowercase())
}

/// Category predicate: the sentinel `0` keeps everything.
#[must_use]
pub const fn matches_category(item: &EnrichedProduct, selected_category_id: RecordId) -> bool {
    selected_category_id == crate::state::NO_FILTER || item.category_id() == selected_category_id
}

/// What: Owner predicate.
///
/// Inputs:
/// - `item`: Enriched product.
/// - `selected_user_id`: Owner to keep, or the sentinel `0`.
///
/// Output:
/// - `true` for the sentinel, otherwise `true` only when the resolved category's `owner_id`
///   equals the selection. Products with an absent category never match a real user.
#[must_use]
pub fn matches_user(item: &EnrichedProduct, selected_user_id: RecordId) -> bool {
    selected_user_id == crate::state::NO_FILTER || item.owner_id() == Some(selected_user_id)
}

/// What: Compute the displayed subset of the enriched products for the given criteria.
///
/// Inputs:
/// - `items`: Full enriched product list (never a previously filtered residual).
/// - `criteria`: Current user/category/search criteria.
///
/// Output:
/// - Products passing all three predicates, in their original relative order.
///
/// Details:
/// - Predicates run text, then category, then user; they are conjunctive so order does not
///   change the result.
/// - An empty output is a normal outcome; rendering a "no matches" notice is up to the caller.
#[must_use]
pub fn filter_products(items: &[EnrichedProduct], criteria: &FilterCriteria) -> Vec<EnrichedProduct> {
    let needle = criteria.search_text.to_lowercase();
    items
        .iter()
        .filter(|it| matches_search_lower(it, &needle))
        .filter(|it| matches_category(it, criteria.selected_category_id))
        .filter(|it| matches_user(it, criteria.selected_user_id))
        .cloned()
        .collect()
}

/// What: Recompute `app.results` from `app.enriched` and the current criteria, then sort.
///
/// Inputs:
/// - `app`: Mutable application state containing `enriched`, `criteria`, `sort` and selection.
///
/// Output:
/// - Updates `app.results`, applies sorting, and preserves selection when possible.
///
/// Details:
/// - Always starts from the full enriched list.
/// - Selection is restored by product id when still visible; otherwise clamped, or cleared if
///   the list is empty.
pub fn apply_filters_and_sort_preserve_selection(app: &mut AppState) {
    // Capture previous selected id to preserve when possible
    let prev_id = app.results.get(app.selected).map(EnrichedProduct::id);

    app.results = filter_products(&app.enriched, &app.criteria);
    tracing::debug!(
        user = app.criteria.selected_user_id,
        category = app.criteria.selected_category_id,
        search = %app.criteria.search_text,
        shown = app.results.len(),
        total = app.enriched.len(),
        "recomputed product list"
    );
    if let Some(order) = app.sort {
        sort_products(&mut app.results, order);
    }

    if app.results.is_empty() {
        app.selected = 0;
        app.table_state.select(None);
        return;
    }
    if let Some(pos) = prev_id.and_then(|id| app.results.iter().position(|p| p.id() == id)) {
        app.selected = pos;
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
    }
    app.table_state.select(Some(app.selected));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::build_enriched_products;
    use crate::state::{SortColumn, SortOrder};
    use crate::test_utils::{new_app, sample_catalog};

    fn ids(items: &[EnrichedProduct]) -> Vec<RecordId> {
        items.iter().map(EnrichedProduct::id).collect()
    }

    fn criteria(user: RecordId, category: RecordId, search: &str) -> FilterCriteria {
        FilterCriteria {
            selected_user_id: user,
            selected_category_id: category,
            search_text: search.into(),
        }
    }

    #[test]
    /// What: Worked scenario over a one-user, one-category catalog
    ///
    /// - Input: Search "ban"; user 1 + category 10; search "xyz"
    /// - Output: Only Banana; both products; nothing
    fn filter_scenario() {
        let data = crate::catalog::parse_catalog(
            r#"{"users":[{"id":1,"name":"Roma","sex":"m"}],
                "categories":[{"id":10,"title":"Fruits","icon":"🍎","ownerId":1}],
                "products":[{"id":100,"name":"Banana","categoryId":10},
                            {"id":101,"name":"Cheese","categoryId":10}]}"#,
        )
        .expect("parse");
        let items = build_enriched_products(&data);
        assert_eq!(ids(&filter_products(&items, &criteria(0, 0, "ban"))), vec![100]);
        assert_eq!(
            ids(&filter_products(&items, &criteria(1, 10, ""))),
            vec![100, 101]
        );
        assert!(filter_products(&items, &criteria(0, 0, "xyz")).is_empty());
    }

    #[test]
    /// What: Default criteria return everything in order
    ///
    /// - Input: Sample catalog, default criteria
    /// - Output: Identical to the enriched list
    fn filter_default_is_identity() {
        let items = build_enriched_products(&sample_catalog());
        assert_eq!(filter_products(&items, &FilterCriteria::default()), items);
    }

    #[test]
    /// What: Search ignores case on both sides
    ///
    /// - Input: "apple", "APPLE", "gReEn" against "Green Apple"
    /// - Output: All match
    fn filter_search_case_insensitive() {
        let items = build_enriched_products(&sample_catalog());
        let apple = items
            .iter()
            .find(|p| p.name() == "Green Apple")
            .expect("fixture has Green Apple");
        assert!(matches_search(apple, "apple"));
        assert!(matches_search(apple, "APPLE"));
        assert!(matches_search(apple, "gReEn"));
        assert!(!matches_search(apple, "pear"));
    }

    #[test]
    /// What: User filter goes through the category's owner
    ///
    /// - Input: User 2 selected; product whose category dangles
    /// - Output: Only products in user 2's categories; dangling product never matches a user
    fn filter_user_via_category_owner() {
        let mut data = sample_catalog();
        data.products.push(crate::catalog::Product {
            id: 999,
            name: "Lost".into(),
            category_id: 12345,
        });
        let items = build_enriched_products(&data);
        let out = filter_products(&items, &criteria(2, 0, ""));
        assert!(!out.is_empty());
        assert!(out.iter().all(|p| p.owner_id() == Some(2)));
        assert!(out.iter().all(|p| p.id() != 999));
        assert!(
            filter_products(&items, &FilterCriteria::default())
                .iter()
                .any(|p| p.id() == 999)
        );
    }

    #[test]
    /// What: Composed filter equals the intersection of single-criterion filters
    ///
    /// - Input: Every user/category combination (plus sentinel and unknown ids) with several texts
    /// - Output: Conjunctive result matches the intersection and preserves order
    fn filter_conjunction_matches_intersection() {
        let data = sample_catalog();
        let items = build_enriched_products(&data);
        let mut users: Vec<RecordId> = data.users.iter().map(|u| u.id).collect();
        users.extend([0, -1, 77]);
        let mut cats: Vec<RecordId> = data.categories.iter().map(|c| c.id).collect();
        cats.extend([0, 77]);
        for &u in &users {
            for &c in &cats {
                for s in ["", "a", "CHE", "zzz"] {
                    let combined = ids(&filter_products(&items, &criteria(u, c, s)));
                    let by_user = ids(&filter_products(&items, &criteria(u, 0, "")));
                    let by_cat = ids(&filter_products(&items, &criteria(0, c, "")));
                    let by_text = ids(&filter_products(&items, &criteria(0, 0, s)));
                    let expected: Vec<RecordId> = ids(&items)
                        .into_iter()
                        .filter(|id| {
                            by_user.contains(id) && by_cat.contains(id) && by_text.contains(id)
                        })
                        .collect();
                    assert_eq!(combined, expected, "user={u} cat={c} search={s:?}");
                }
            }
        }
    }

    #[test]
    /// What: Recompute preserves selection by id and clears it on empty results
    ///
    /// - Input: Select a Dairy product, filter to Dairy, then to a non-matching search
    /// - Output: Same product stays selected; then selection cleared
    fn apply_filters_preserves_selection() {
        let mut app = new_app();
        let milk = app
            .results
            .iter()
            .position(|p| p.name() == "Milk")
            .expect("fixture has Milk");
        app.selected = milk;
        app.table_state.select(Some(milk));

        app.criteria.selected_category_id = 20;
        apply_filters_and_sort_preserve_selection(&mut app);
        assert_eq!(app.results[app.selected].name(), "Milk");
        assert_eq!(app.table_state.selected(), Some(app.selected));

        app.criteria.search_text = "nothing-matches".into();
        apply_filters_and_sort_preserve_selection(&mut app);
        assert!(app.results.is_empty());
        assert_eq!(app.selected, 0);
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    /// What: Under an active sort, a filtered-out selection clamps its old index
    ///
    /// - Input: Name-descending sort, "Milk" highlighted at index 1, then search "e"
    /// - Output: Two sorted matches; highlight stays at index 1 instead of jumping to
    ///   whichever product happened to sit at that index before sorting
    fn sorted_recompute_clamps_lost_selection() {
        let mut app = new_app();
        app.sort = Some(SortOrder::desc(SortColumn::Name));
        apply_filters_and_sort_preserve_selection(&mut app);
        assert_eq!(app.results[1].name(), "Milk");
        app.selected = 1;

        app.criteria.search_text = "e".into();
        apply_filters_and_sort_preserve_selection(&mut app);
        let names: Vec<&str> = app.results.iter().map(EnrichedProduct::name).collect();
        assert_eq!(names, vec!["Green Apple", "Cheese"]);
        assert_eq!(app.selected, 1);
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    /// What: Changing the sort keeps the highlighted product selected
    fn set_sort_preserves_selection() {
        let mut app = new_app();
        app.selected = 3;
        assert_eq!(app.results[3].name(), "Milk");
        app.set_sort(Some(SortOrder::desc(SortColumn::Id)));
        assert_eq!(ids(&app.results), vec![104, 103, 102, 101, 100]);
        assert_eq!(app.results[app.selected].name(), "Milk");
    }
}
