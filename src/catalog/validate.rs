//! Integrity report over loaded reference data.
//!
//! Nothing here rejects data. Dangling references are tolerated by the join
//! logic (they surface as absent category/owner); this module only names them
//! so they can be logged at startup.

use std::collections::HashSet;
use std::fmt;

use super::{CatalogData, RecordId};

/// A single integrity finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogIssue {
    /// User id is `<= 0`, colliding with the "no filter" sentinel range.
    NonPositiveUserId(RecordId),
    /// Category id is `<= 0`, colliding with the "no filter" sentinel range.
    NonPositiveCategoryId(RecordId),
    /// Two users share an id.
    DuplicateUserId(RecordId),
    /// Two categories share an id.
    DuplicateCategoryId(RecordId),
    /// Two products share an id.
    DuplicateProductId(RecordId),
    /// A category's owner does not exist.
    DanglingOwner {
        /// Category holding the reference.
        category_id: RecordId,
        /// Missing user id.
        owner_id: RecordId,
    },
    /// A product's category does not exist.
    DanglingCategory {
        /// Product holding the reference.
        product_id: RecordId,
        /// Missing category id.
        category_id: RecordId,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveUserId(id) => write!(f, "user id {id} is not positive"),
            Self::NonPositiveCategoryId(id) => write!(f, "category id {id} is not positive"),
            Self::DuplicateUserId(id) => write!(f, "duplicate user id {id}"),
            Self::DuplicateCategoryId(id) => write!(f, "duplicate category id {id}"),
            Self::DuplicateProductId(id) => write!(f, "duplicate product id {id}"),
            Self::DanglingOwner {
                category_id,
                owner_id,
            } => write!(f, "category {category_id} references missing user {owner_id}"),
            Self::DanglingCategory {
                product_id,
                category_id,
            } => write!(
                f,
                "product {product_id} references missing category {category_id}"
            ),
        }
    }
}

/// What: Collect integrity issues in the reference data.
///
/// Inputs:
/// - `data`: Loaded catalog.
///
/// Output:
/// - Issues in discovery order (users, categories, products); empty when clean.
///
/// Details:
/// - Duplicates are reported once per extra occurrence.
#[must_use]
pub fn validate_catalog(data: &CatalogData) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let mut user_ids: HashSet<RecordId> = HashSet::with_capacity(data.users.len());
    for u in &data.users {
        if u.id <= 0 {
            issues.push(CatalogIssue::NonPositiveUserId(u.id));
        }
        if !user_ids.insert(u.id) {
            issues.push(CatalogIssue::DuplicateUserId(u.id));
        }
    }

    let mut category_ids: HashSet<RecordId> = HashSet::with_capacity(data.categories.len());
    for c in &data.categories {
        if c.id <= 0 {
            issues.push(CatalogIssue::NonPositiveCategoryId(c.id));
        }
        if !category_ids.insert(c.id) {
            issues.push(CatalogIssue::DuplicateCategoryId(c.id));
        }
        if !user_ids.contains(&c.owner_id) {
            issues.push(CatalogIssue::DanglingOwner {
                category_id: c.id,
                owner_id: c.owner_id,
            });
        }
    }

    let mut product_ids: HashSet<RecordId> = HashSet::with_capacity(data.products.len());
    for p in &data.products {
        if !product_ids.insert(p.id) {
            issues.push(CatalogIssue::DuplicateProductId(p.id));
        }
        if !category_ids.contains(&p.category_id) {
            issues.push(CatalogIssue::DanglingCategory {
                product_id: p.id,
                category_id: p.category_id,
            });
        }
    }

    issues
}

/// Emit one warning per issue.
pub fn log_issues(issues: &[CatalogIssue]) {
    for issue in issues {
        tracing::warn!(issue = %issue, "catalog integrity");
    }
    if !issues.is_empty() {
        tracing::warn!(count = issues.len(), "catalog loaded with integrity issues");
    }
}
