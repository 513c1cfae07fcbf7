//! Core value types used by prodcat state.

use crate::catalog::RecordId;

/// Sentinel id meaning "no filter" for the user and category dimensions.
pub const NO_FILTER: RecordId = 0;

/// Current values of the three filter dimensions.
///
/// `0` in an id field and `""` in `search_text` mean "not filtering" on that
/// dimension. The default value is the fully unfiltered state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Owning user to keep, or [`NO_FILTER`].
    pub selected_user_id: RecordId,
    /// Category to keep, or [`NO_FILTER`].
    pub selected_category_id: RecordId,
    /// Case-insensitive substring the product name must contain.
    pub search_text: String,
}

impl FilterCriteria {
    /// What: Return every criterion to its unfiltered default.
    ///
    /// Output:
    /// - `self` equals `FilterCriteria::default()`; calling it again changes nothing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether no criterion is active.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.selected_user_id == NO_FILTER
            && self.selected_category_id == NO_FILTER
            && self.search_text.is_empty()
    }

    /// Active user filter, `None` for the sentinel.
    #[must_use]
    pub const fn user_filter(&self) -> Option<RecordId> {
        if self.selected_user_id == NO_FILTER {
            None
        } else {
            Some(self.selected_user_id)
        }
    }

    /// Active category filter, `None` for the sentinel.
    #[must_use]
    pub const fn category_filter(&self) -> Option<RecordId> {
        if self.selected_category_id == NO_FILTER {
            None
        } else {
            Some(self.selected_category_id)
        }
    }
}

/// Column a sort can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Product id.
    Id,
    /// Product name.
    Name,
    /// Category title.
    Category,
    /// Owner name.
    User,
}

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

/// An explicit sort applied after filtering. `None` in state keeps input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Column to compare on.
    pub column: SortColumn,
    /// Direction to apply.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending sort on `column`.
    #[must_use]
    pub const fn asc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `column`.
    #[must_use]
    pub const fn desc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// What: Return the string key used in settings files and on the CLI.
    ///
    /// Inputs:
    /// - `order`: Sort to encode, `None` for unsorted.
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(order: Option<Self>) -> &'static str {
        let Some(o) = order else {
            return "none";
        };
        match (o.column, o.direction) {
            (SortColumn::Id, SortDirection::Asc) => "id",
            (SortColumn::Id, SortDirection::Desc) => "id_desc",
            (SortColumn::Name, SortDirection::Asc) => "name",
            (SortColumn::Name, SortDirection::Desc) => "name_desc",
            (SortColumn::Category, SortDirection::Asc) => "category",
            (SortColumn::Category, SortDirection::Desc) => "category_desc",
            (SortColumn::User, SortDirection::Asc) => "user",
            (SortColumn::User, SortDirection::Desc) => "user_desc",
        }
    }

    /// What: Parse a sort from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive, `-` and spaces treated as `_`).
    ///
    /// Output: `Some(Some(order))` for a sort, `Some(None)` for "none", `None` when unrecognized.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Option<Self>> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        let parsed = match key.as_str() {
            "none" | "off" | "original" | "" => None,
            "id" | "id_asc" => Some(Self::asc(SortColumn::Id)),
            "id_desc" => Some(Self::desc(SortColumn::Id)),
            "name" | "name_asc" | "product" | "product_asc" => Some(Self::asc(SortColumn::Name)),
            "name_desc" | "product_desc" => Some(Self::desc(SortColumn::Name)),
            "category" | "category_asc" => Some(Self::asc(SortColumn::Category)),
            "category_desc" => Some(Self::desc(SortColumn::Category)),
            "user" | "user_asc" | "owner" | "owner_asc" => Some(Self::asc(SortColumn::User)),
            "user_desc" | "owner_desc" => Some(Self::desc(SortColumn::User)),
            _ => return None,
        };
        Some(parsed)
    }
}

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search text input.
    #[default]
    Search,
    /// User tabs.
    Users,
    /// Category buttons.
    Categories,
    /// Product table.
    Table,
}

impl Focus {
    /// Next focus in `Tab` order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Users,
            Self::Users => Self::Categories,
            Self::Categories => Self::Table,
            Self::Table => Self::Search,
        }
    }

    /// Previous focus in `Tab` order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Table,
            Self::Users => Self::Search,
            Self::Categories => Self::Users,
            Self::Table => Self::Categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Reset returns to defaults and is idempotent
    ///
    /// - Input: Criteria with all three dimensions set; reset twice
    /// - Output: Equal to default after first and second reset
    fn criteria_reset_idempotent() {
        let mut c = FilterCriteria {
            selected_user_id: 3,
            selected_category_id: 5,
            search_text: "apple".into(),
        };
        assert!(!c.is_unfiltered());
        c.reset();
        let once = c.clone();
        c.reset();
        assert_eq!(once, FilterCriteria::default());
        assert_eq!(c, once);
        assert!(c.is_unfiltered());
        assert_eq!(c.user_filter(), None);
        assert_eq!(c.category_filter(), None);
    }

    #[test]
    /// What: Sort config key mapping roundtrip and alias handling
    ///
    /// - Input: Known keys and aliases; unknown key
    /// - Output: Correct mapping; `None` for unknown
    fn sort_order_config_roundtrip_and_aliases() {
        assert_eq!(SortOrder::as_config_key(None), "none");
        assert_eq!(
            SortOrder::as_config_key(Some(SortOrder::desc(SortColumn::User))),
            "user_desc"
        );
        assert_eq!(
            SortOrder::from_config_key("Name"),
            Some(Some(SortOrder::asc(SortColumn::Name)))
        );
        assert_eq!(
            SortOrder::from_config_key("owner-desc"),
            Some(Some(SortOrder::desc(SortColumn::User)))
        );
        assert_eq!(SortOrder::from_config_key("none"), Some(None));
        assert_eq!(SortOrder::from_config_key("popularity"), None);
        for key in [
            "id",
            "id_desc",
            "name",
            "name_desc",
            "category",
            "category_desc",
            "user",
            "user_desc",
        ] {
            let parsed = SortOrder::from_config_key(key).expect("known key");
            assert_eq!(SortOrder::as_config_key(parsed), key);
        }
    }

    #[test]
    fn focus_cycle_is_closed() {
        let mut f = Focus::default();
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, Focus::Search);
        assert_eq!(Focus::Search.prev().next(), Focus::Search);
    }
}
