//! Reference data for the catalog: users, categories and products.
//!
//! All three record sets are supplied once at startup and never mutated
//! afterwards. [`CatalogData`] is the read-only context handed to the join
//! and enrichment logic; nothing in the crate keeps module-level copies of it.

use serde::{Deserialize, Serialize};

pub mod load;
pub mod validate;

pub use load::{CatalogError, default_catalog, load_catalog, parse_catalog};
pub use validate::{CatalogIssue, log_issues, validate_catalog};

/// Identifier type shared by users, categories and products.
///
/// Genuine user and category ids are `> 0`; `0` is reserved as the
/// "no filter" sentinel in [`crate::state::FilterCriteria`].
pub type RecordId = i64;

/// Sex of a user, serialized as `"m"` / `"f"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialized as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Serialized as `"f"`.
    #[serde(rename = "f")]
    Female,
}

/// A user who owns one or more categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique id, `> 0`.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Used to pick the owner colour in the product table.
    pub sex: Sex,
}

/// A product category and the user owning it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique id, `> 0`.
    pub id: RecordId,
    /// Display title.
    pub title: String,
    /// Short icon string (usually a single emoji).
    pub icon: String,
    /// Id of the owning [`User`]. Not guaranteed to resolve.
    pub owner_id: RecordId,
}

/// A catalog item linked to a [`Category`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id.
    pub id: RecordId,
    /// Display name; the text filter matches against it.
    pub name: String,
    /// Id of the [`Category`]. Not guaranteed to resolve.
    pub category_id: RecordId,
}

/// The three immutable record sets, in the order they were supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// All users.
    #[serde(default)]
    pub users: Vec<User>,
    /// All categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// All products, in display order.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A product together with its resolved category and owner.
///
/// Built once by [`crate::logic::build_enriched_products`]. Display code reads
/// the pre-resolved fields instead of joining again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    /// The underlying product record.
    #[serde(flatten)]
    pub product: Product,
    /// Resolved category, `None` when `category_id` dangles.
    pub category: Option<Category>,
    /// Resolved owner, `None` when the category or its owner dangles.
    pub owner: Option<User>,
}

impl EnrichedProduct {
    /// Product id.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.product.id
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Category id as stored on the product (resolved or not).
    #[must_use]
    pub const fn category_id(&self) -> RecordId {
        self.product.category_id
    }

    /// Owner id as recorded on the resolved category, if any.
    #[must_use]
    pub fn owner_id(&self) -> Option<RecordId> {
        self.category.as_ref().map(|c| c.owner_id)
    }

    /// What: Category cell text in the `"<icon> - <title>"` form.
    ///
    /// Output:
    /// - Empty string when the category is absent.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.category
            .as_ref()
            .map(|c| format!("{} - {}", c.icon, c.title))
            .unwrap_or_default()
    }

    /// Owner name, or an empty string when the owner is absent.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map_or("", |u| u.name.as_str())
    }

    /// Owner sex, if the owner resolved.
    #[must_use]
    pub fn owner_sex(&self) -> Option<Sex> {
        self.owner.as_ref().map(|u| u.sex)
    }
}
