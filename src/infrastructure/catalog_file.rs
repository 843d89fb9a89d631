// SPDX-License-Identifier: MPL-2.0
//! TOML catalog files.
//!
//! A catalog file is an array of `[[items]]` tables:
//!
//! ```toml
//! [[items]]
//! id = "1"
//! title = "Red Hammer"
//! category = "tools"
//! imageUrl = "images/hammer.jpg"
//! tags = ["sale"]
//! date = "2024-01-01"
//! price = "12 €"
//! ```
//!
//! `imageUrl` and `image_url` are both accepted. Identifiers, sizes and prices
//! may be written as numbers. Relative image paths are resolved against the
//! directory of the catalog file.

use crate::domain::catalog::{Catalog, Item, ItemId};
use crate::error::{CatalogError, Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: Scalar,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "imageUrl")]
    image_url: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    liked: bool,
    #[serde(default)]
    date: Option<Scalar>,
    #[serde(default)]
    size: Option<Scalar>,
    #[serde(default)]
    price: Option<Scalar>,
}

/// A text field that may also be written as a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item {
            id: ItemId::new(record.id.into_text()),
            title: record.title,
            description: record.description,
            image_url: record.image_url,
            category: record.category,
            tags: record.tags,
            liked: record.liked,
            date: record.date.map(Scalar::into_text),
            size: record.size.map(Scalar::into_text),
            price: record.price.map(Scalar::into_text),
        }
    }
}

/// Parses catalog TOML text.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed TOML or missing fields, and
/// the identifier errors of [`Catalog::new`].
pub fn parse(text: &str) -> Result<Catalog> {
    let file: CatalogFile =
        toml::from_str(text).map_err(|err| CatalogError::Parse(err.message().to_string()))?;
    let items = file.items.into_iter().map(Item::from).collect();
    Ok(Catalog::new(items)?)
}

/// Reads and parses a catalog file, resolving relative image paths.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise see [`parse`].
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)?;
    let catalog = parse(&text)?;
    Ok(resolve_images(catalog, path.parent()))
}

/// Async variant of [`load_from_path`] for use in an Iced `Task`.
///
/// # Errors
///
/// Same as [`load_from_path`].
pub async fn load(path: std::path::PathBuf) -> Result<Catalog> {
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| Error::Io(format!("{}: {err}", path.display())))?;
    let catalog = parse(&text)?;
    let count = catalog.len();
    tracing::info!(path = %path.display(), count, "Catalog loaded");
    Ok(resolve_images(catalog, path.parent()))
}

fn resolve_images(catalog: Catalog, base: Option<&Path>) -> Catalog {
    let Some(base) = base else {
        return catalog;
    };
    let items: Vec<Item> = catalog
        .items()
        .iter()
        .cloned()
        .map(|mut item| {
            if is_relative_path(&item.image_url) {
                item.image_url = base.join(&item.image_url).to_string_lossy().into_owned();
            }
            item
        })
        .collect();
    // Ids were validated when `catalog` was built and are unchanged here.
    Catalog::new(items).unwrap_or(catalog)
}

fn is_relative_path(location: &str) -> bool {
    !location.is_empty() && !location.contains("://") && Path::new(location).is_relative()
}
