// SPDX-License-Identifier: MPL-2.0
//! Visible set computation.
//!
//! The visible set is derived from the catalog and the current
//! [`QueryState`]: items are filtered first (text AND category), then the
//! survivors are ordered by the selected [`SortKey`]. The derivation is pure;
//! callers recompute it whenever they need it instead of caching it.
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::query::{compute_visible, QueryState, SortKey};
//! use iced_gallery::domain::catalog::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("1", "Red Hammer", "tools").with_date("2024-01-01"),
//!     Item::new("2", "Blue Saw", "tools").with_date("2024-02-01"),
//! ])
//! .unwrap();
//!
//! let query = QueryState { sort: SortKey::Title, ..QueryState::default() };
//! let ids: Vec<_> = compute_visible(&catalog, &query)
//!     .iter()
//!     .map(|item| item.id.as_str())
//!     .collect();
//! assert_eq!(ids, ["2", "1"]);
//! ```

use crate::domain::catalog::{sort_timestamp, Catalog, Item, ALL_CATEGORIES};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// =============================================================================
// Sort Key
// =============================================================================

/// Ordering applied to the filtered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first; undated items last.
    #[default]
    Date,
    /// Title, ascending.
    Title,
    /// Category, ascending.
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Title, SortKey::Category];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Title => "title",
            SortKey::Category => "category",
        }
    }

    /// Returns the i18n key of the option label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortKey::Date => "sort-by-date",
            SortKey::Title => "sort-by-title",
            SortKey::Category => "sort-by-category",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::InvalidSelection(format!("unknown sort key `{s}`")))
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Category predicate of the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every item passes.
    #[default]
    All,
    /// Only items whose category equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    /// Maps a category option name to a filter; `"all"` is the synthetic entry.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(name.to_string())
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }
}

// =============================================================================
// Query State
// =============================================================================

/// Search term, category and sort key currently applied to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl QueryState {
    /// Returns `true` if the query hides any item.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty() || self.category.is_active()
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_lowered(item, &self.search.to_lowercase())
    }

    fn matches_lowered(&self, item: &Item, needle: &str) -> bool {
        item.matches_text(needle) && self.category.matches(item)
    }
}

/// Derives the visible set: filter, then sort.
///
/// Sorting is stable, so items that compare equal keep their catalog order.
#[must_use]
pub fn compute_visible<'a>(catalog: &'a Catalog, query: &QueryState) -> Vec<&'a Item> {
    let needle = query.search.to_lowercase();
    let mut visible: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| query.matches_lowered(item, &needle))
        .collect();

    match query.sort {
        SortKey::Date => {
            visible.sort_by_cached_key(|item| Reverse(sort_timestamp(item.date.as_deref())));
        }
        SortKey::Title => visible.sort_by_cached_key(|item| CollationKey::new(&item.title)),
        SortKey::Category => visible.sort_by_cached_key(|item| CollationKey::new(&item.category)),
    }

    visible
}

/// Multi-level text collation key.
///
/// Base letters compare first, ignoring accents and case. Accents break
/// ties next, then case, with lowercase ahead of uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accents: String,
    case: String,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let decomposed: String = text.nfd().collect();
        let base = decomposed
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let accents = decomposed.chars().flat_map(char::to_lowercase).collect();
        // Swapping case puts lowercase first under code point order.
        let case = decomposed
            .chars()
            .flat_map(|c| {
                if c.is_lowercase() {
                    c.to_uppercase().collect::<Vec<_>>()
                } else {
                    c.to_lowercase().collect::<Vec<_>>()
                }
            })
            .collect();
        Self {
            base,
            accents,
            case,
        }
    }
}
