// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`browser`]: The collection browser state container and its commands
//! - [`interaction`]: Liked-item store
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (visible set, viewer navigation)
//! - [`view_mode`]: Grid/list display mode
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer uses application layer services
//! - Nothing here knows about Iced
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::browser::{Browser, BrowserOptions, Command};
//! use iced_gallery::application::query::Direction;
//! use iced_gallery::domain::catalog::{Catalog, Item, ItemId};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", "Alpha", "x"),
//!     Item::new("b", "Beta", "x"),
//! ])
//! .unwrap();
//! let mut browser = Browser::new(catalog, BrowserOptions::default());
//! browser.dispatch(Command::Open(ItemId::new("a")));
//! browser.dispatch(Command::Step(Direction::Next));
//! assert_eq!(browser.navigator().selected(), Some(&ItemId::new("b")));
//! ```

pub mod browser;
pub mod interaction;
pub mod port;
pub mod query;
pub mod view_mode;
