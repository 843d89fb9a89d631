// SPDX-License-Identifier: MPL-2.0
//! Catalog item and its identifier.

use std::fmt;

/// Opaque, stable identifier of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A browsable entry of the collection.
///
/// Items are immutable once placed in a [`Catalog`](super::Catalog). The
/// `liked` flag is advisory only; the live liked state belongs to the
/// application's interaction store.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    /// Image location, either a local path or a URL.
    pub image_url: String,
    pub category: String,
    pub tags: Vec<String>,
    pub liked: bool,
    /// ISO date-like text, e.g. `2024-03-01`.
    pub date: Option<String>,
    /// Free-form size label, e.g. `"40 x 60 cm"`.
    pub size: Option<String>,
    /// Free-form price label. Items without a price cannot be ordered.
    pub price: Option<String>,
}

impl Item {
    /// Creates an item with the mandatory fields; the rest start empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            title: title.into(),
            description: None,
            image_url: String::new(),
            category: category.into(),
            tags: Vec::new(),
            liked: false,
            date: None,
            size: None,
            price: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    /// Returns `true` if the item can be ordered.
    #[must_use]
    pub fn is_orderable(&self) -> bool {
        self.price.is_some()
    }

    /// Case-insensitive substring match against title, description and tags.
    ///
    /// `needle` must already be lowercased. An empty needle matches.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Splits the tags into the first `limit` and the count of the rest.
    #[must_use]
    pub fn tag_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let item = Item::new("1", "Red Hammer", "tools")
            .with_description("Heavy")
            .with_tags(["sale", "steel"])
            .with_date("2024-01-01")
            .with_price("12 €")
            .with_size("30 cm")
            .with_liked(true);
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.description.as_deref(), Some("Heavy"));
        assert_eq!(item.tags, vec!["sale", "steel"]);
        assert!(item.liked);
        assert!(item.is_orderable());
    }

    #[test]
    fn item_without_price_is_not_orderable() {
        assert!(!Item::new("1", "Mug", "kitchen").is_orderable());
    }

    #[test]
    fn matches_text_checks_title_case_insensitively() {
        let item = Item::new("1", "Red Hammer", "tools");
        assert!(item.matches_text("hammer"));
        assert!(item.matches_text("red h"));
        assert!(!item.matches_text("saw"));
    }

    #[test]
    fn matches_text_checks_description_and_tags() {
        let item = Item::new("1", "Mug", "kitchen")
            .with_description("Hand-made STONEWARE")
            .with_tags(["Sale"]);
        assert!(item.matches_text("stoneware"));
        assert!(item.matches_text("sale"));
        assert!(!item.matches_text("porcelain"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(Item::new("1", "", "").matches_text(""));
    }

    #[test]
    fn category_is_not_searched() {
        let item = Item::new("1", "Mug", "kitchen");
        assert!(!item.matches_text("kitchen"));
    }

    #[test]
    fn tag_preview_splits_overflow() {
        let item = Item::new("1", "Mug", "kitchen").with_tags(["a", "b", "c", "d", "e"]);
        let (shown, more) = item.tag_preview(3);
        assert_eq!(shown, ["a", "b", "c"]);
        assert_eq!(more, 2);

        let short = Item::new("2", "Cup", "kitchen").with_tags(["a"]);
        let (shown, more) = short.tag_preview(3);
        assert_eq!(shown.len(), 1);
        assert_eq!(more, 0);
    }

    #[test]
    fn item_id_displays_raw_value() {
        assert_eq!(ItemId::from("abc").to_string(), "abc");
    }
}
