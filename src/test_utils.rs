//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::catalog::{CatalogData, Category, Product, Sex, User};
#[cfg(test)]
use crate::state::AppState;

#[cfg(test)]
/// What: Provide a small, fully consistent catalog.
///
/// Inputs: None
///
/// Output:
/// - Two users (Roma, Anna), two categories (Fruits owned by Roma, Dairy owned by Anna)
///   and five products in id order 100..=104.
pub fn sample_catalog() -> CatalogData {
    let product = |id, name: &str, category_id| Product {
        id,
        name: name.to_string(),
        category_id,
    };
    CatalogData {
        users: vec![
            User {
                id: 1,
                name: "Roma".into(),
                sex: Sex::Male,
            },
            User {
                id: 2,
                name: "Anna".into(),
                sex: Sex::Female,
            },
        ],
        categories: vec![
            Category {
                id: 10,
                title: "Fruits".into(),
                icon: "🍎".into(),
                owner_id: 1,
            },
            Category {
                id: 20,
                title: "Dairy".into(),
                icon: "🧀".into(),
                owner_id: 2,
            },
        ],
        products: vec![
            product(100, "Banana", 10),
            product(101, "Cheese", 10),
            product(102, "Green Apple", 10),
            product(103, "Milk", 20),
            product(104, "yogurt", 20),
        ],
    }
}

#[cfg(test)]
/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output: Fresh `AppState` over [`sample_catalog`] with no filters applied
pub fn new_app() -> AppState {
    AppState::new(sample_catalog())
}
