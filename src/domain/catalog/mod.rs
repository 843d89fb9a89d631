// SPDX-License-Identifier: MPL-2.0
//! Catalog of browsable items.
//!
//! A [`Catalog`] is the ordered, read-only list of [`Item`]s supplied for one
//! session. Identifiers are unique; construction rejects duplicates and empty
//! identifiers so the rest of the application can look items up by id.
//!
//! # Example
//!
//! ```
//! use iced_gallery::domain::catalog::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("1", "Red Hammer", "tools"),
//!     Item::new("2", "Green Mug", "kitchen"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.category_options(), vec!["all", "tools", "kitchen"]);
//! ```

pub mod date;
pub mod item;

pub use date::sort_timestamp;
pub use item::{Item, ItemId};

use crate::error::CatalogError;
use std::collections::HashSet;

/// Synthetic category value that matches every item.
pub const ALL_CATEGORIES: &str = "all";

/// Ordered, immutable sequence of items for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, validating identifier uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyId`] if an item has a blank identifier and
    /// [`CatalogError::DuplicateId`] if two items share one.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.to_string()));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the category universe: [`ALL_CATEGORIES`] followed by every
    /// distinct category in first-seen catalog order.
    #[must_use]
    pub fn category_options(&self) -> Vec<&str> {
        let mut options = vec![ALL_CATEGORIES];
        for item in &self.items {
            let category = item.category.as_str();
            if !options[1..].contains(&category) {
                options.push(category);
            }
        }
        options
    }

    /// Returns `true` if `category` is one of the catalog's categories.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.items.iter().any(|item| item.category == category)
    }
}
