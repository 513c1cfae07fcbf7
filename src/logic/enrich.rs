//! View model builder: attaches resolved category and owner to each product.

use crate::catalog::{CatalogData, EnrichedProduct};

use super::join::{resolve_category, resolve_owner};

/// What: Build the enriched view of every product, once per data load.
///
/// Inputs:
/// - `catalog`: Reference data (users, categories, products).
///
/// Output:
/// - One [`EnrichedProduct`] per product, in input product order.
///
/// Details:
/// - Dangling references produce `None` for `category` and/or `owner`; no error is raised.
/// - The owner is resolved through the category's `owner_id`, so an absent category implies
///   an absent owner.
#[must_use]
pub fn build_enriched_products(catalog: &CatalogData) -> Vec<EnrichedProduct> {
    let enriched: Vec<EnrichedProduct> = catalog
        .products
        .iter()
        .map(|product| {
            let category = resolve_category(catalog, product.category_id);
            let owner = resolve_owner(catalog, category.map(|c| c.owner_id));
            EnrichedProduct {
                product: product.clone(),
                category: category.cloned(),
                owner: owner.cloned(),
            }
        })
        .collect();
    let unresolved = enriched.iter().filter(|p| p.owner.is_none()).count();
    tracing::debug!(
        products = enriched.len(),
        unresolved = unresolved,
        "built enriched products"
    );
    enriched
}
