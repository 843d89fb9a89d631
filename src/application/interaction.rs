// SPDX-License-Identifier: MPL-2.0
//! Per-item interaction state.
//!
//! [`LikedStore`] is the set of liked item identifiers. It is independent of
//! the query pipeline: liking an item never changes what is visible.

use crate::domain::catalog::{Catalog, ItemId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedStore {
    liked: HashSet<ItemId>,
}

impl LikedStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from the advisory `liked` flags of the catalog items.
    #[must_use]
    pub fn seeded_from(catalog: &Catalog) -> Self {
        Self {
            liked: catalog
                .items()
                .iter()
                .filter(|item| item.liked)
                .map(|item| item.id.clone())
                .collect(),
        }
    }

    /// Flips membership of `id` and returns the new state.
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        }
    }

    #[must_use]
    pub fn is_liked(&self, id: &ItemId) -> bool {
        self.liked.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.liked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }
}
