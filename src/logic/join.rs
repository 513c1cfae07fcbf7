//! Join resolver: foreign-key lookups over the reference data.
//!
//! Both lookups are linear scans. The data sets are small and the enrichment
//! pass runs once per load, so no index is kept.

use crate::catalog::{CatalogData, Category, RecordId, User};

/// What: Find the category a product points at.
///
/// Inputs:
/// - `catalog`: Reference data.
/// - `category_id`: Id stored on the product.
///
/// Output:
/// - The first category with that id, or `None` when the reference dangles.
#[must_use]
pub fn resolve_category(catalog: &CatalogData, category_id: RecordId) -> Option<&Category> {
    catalog.categories.iter().find(|c| c.id == category_id)
}

/// What: Find the user owning a category.
///
/// Inputs:
/// - `catalog`: Reference data.
/// - `owner_id`: Owner id taken from a resolved category, `None` when the category is absent.
///
/// Output:
/// - The first user with that id; `None` without searching when `owner_id` is `None`.
#[must_use]
pub fn resolve_owner(catalog: &CatalogData, owner_id: Option<RecordId>) -> Option<&User> {
    let id = owner_id?;
    catalog.users.iter().find(|u| u.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_catalog;

    #[test]
    /// What: Lookups hit, miss, and short-circuit on absent owner id
    ///
    /// - Input: Sample catalog; existing and missing ids
    /// - Output: Matching records; `None` for misses and for `owner_id = None`
    fn resolve_hits_and_misses() {
        let data = sample_catalog();
        assert_eq!(
            resolve_category(&data, 10).map(|c| c.title.as_str()),
            Some("Fruits")
        );
        assert!(resolve_category(&data, 999).is_none());
        assert_eq!(
            resolve_owner(&data, Some(1)).map(|u| u.name.as_str()),
            Some("Roma")
        );
        assert!(resolve_owner(&data, Some(999)).is_none());
        assert!(resolve_owner(&data, None).is_none());
    }

    #[test]
    /// What: Repeated lookups are deterministic
    ///
    /// - Input: Every product's category id, resolved twice
    /// - Output: Identical results on both passes
    fn resolve_is_deterministic() {
        let data = sample_catalog();
        for p in &data.products {
            let c1 = resolve_category(&data, p.category_id);
            let c2 = resolve_category(&data, p.category_id);
            assert_eq!(c1, c2);
            let o1 = resolve_owner(&data, c1.map(|c| c.owner_id));
            let o2 = resolve_owner(&data, c2.map(|c| c.owner_id));
            assert_eq!(o1, o2);
        }
    }
}
