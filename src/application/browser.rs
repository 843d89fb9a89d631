// SPDX-License-Identifier: MPL-2.0
//! Collection browser state container.
//!
//! [`Browser`] owns everything that changes during a session (query, liked
//! items, view mode, open item) on top of a read-only [`Catalog`]. All
//! mutations go through [`Browser::dispatch`], which applies one [`Command`]
//! synchronously and reports what happened as an optional [`Notice`].
//! [`Browser::dispatch_with`] additionally forwards the notice to a
//! [`BrowserHooks`] implementation.
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::browser::{Browser, BrowserOptions, Command, Notice};
//! use iced_gallery::domain::catalog::{Catalog, Item, ItemId};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", "Alpha", "x"),
//!     Item::new("b", "Beta", "x"),
//! ])
//! .unwrap();
//! let mut browser = Browser::new(catalog, BrowserOptions::default());
//!
//! let notice = browser.dispatch(Command::Open(ItemId::new("a")));
//! assert_eq!(notice, Some(Notice::ItemViewed(ItemId::new("a"))));
//! assert!(browser.navigator().is_open());
//! ```

use crate::application::interaction::LikedStore;
use crate::application::port::BrowserHooks;
use crate::application::query::{
    compute_visible, CategoryFilter, Direction, ModalNavigator, NavigationInfo, QueryState,
    SortKey,
};
use crate::application::view_mode::ViewMode;
use crate::domain::catalog::{Catalog, Item, ItemId, ALL_CATEGORIES};
use crate::error::{Error, Result};

/// Keys the viewer reacts to while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// A state change requested by the user or the embedder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetSearch(String),
    SelectCategory(CategoryFilter),
    SetSort(SortKey),
    SetViewMode(ViewMode),
    ToggleLike(ItemId),
    Share(ItemId),
    Download(ItemId),
    Order(ItemId),
    Open(ItemId),
    Close,
    Step(Direction),
    Key(ModalKey),
}

/// Outcome of a dispatched command worth reporting outside the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ItemViewed(ItemId),
    LikeToggled { id: ItemId, liked: bool },
    ShareRequested(ItemId),
    DownloadRequested(ItemId),
    OrderRequested(ItemId),
    /// The viewer moved to another item.
    Navigated(ItemId),
    ViewerClosed,
}

/// Session options of a browser.
// Allow excessive bools: independent toolbar visibility switches.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    pub show_filters: bool,
    pub show_search: bool,
    pub show_view_toggle: bool,
    pub view_mode: ViewMode,
    pub sort: SortKey,
    /// Initialize the liked store from the items' advisory flags.
    pub seed_likes: bool,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            show_filters: true,
            show_search: true,
            show_view_toggle: true,
            view_mode: ViewMode::default(),
            sort: SortKey::default(),
            seed_likes: false,
        }
    }
}

/// Counts shown in the gallery header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub visible: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    options: BrowserOptions,
    query: QueryState,
    liked: LikedStore,
    view_mode: ViewMode,
    navigator: ModalNavigator,
}

impl Browser {
    #[must_use]
    pub fn new(catalog: Catalog, options: BrowserOptions) -> Self {
        let liked = if options.seed_likes {
            LikedStore::seeded_from(&catalog)
        } else {
            LikedStore::new()
        };
        let query = QueryState {
            sort: options.sort,
            ..QueryState::default()
        };
        Self {
            view_mode: options.view_mode,
            catalog,
            options,
            query,
            liked,
            navigator: ModalNavigator::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn options(&self) -> &BrowserOptions {
        &self.options
    }

    #[must_use]
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn navigator(&self) -> &ModalNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn liked(&self) -> &LikedStore {
        &self.liked
    }

    #[must_use]
    pub fn is_liked(&self, id: &ItemId) -> bool {
        self.liked.is_liked(id)
    }

    /// Current visible set, freshly derived.
    #[must_use]
    pub fn visible(&self) -> Vec<&Item> {
        compute_visible(&self.catalog, &self.query)
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            visible: self.visible().len(),
            total: self.catalog.len(),
        }
    }

    #[must_use]
    pub fn category_options(&self) -> Vec<&str> {
        self.catalog.category_options()
    }

    /// The item currently open in the viewer.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.navigator
            .selected()
            .and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        self.navigator.info(&self.visible())
    }

    /// Selects a category by its option name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] if `name` is neither `"all"` nor a
    /// category present in the catalog.
    pub fn select_category_named(&mut self, name: &str) -> Result<()> {
        if name != ALL_CATEGORIES && !self.catalog.has_category(name) {
            return Err(Error::InvalidSelection(format!(
                "unknown category `{name}`"
            )));
        }
        self.dispatch(Command::SelectCategory(CategoryFilter::from_name(name)));
        Ok(())
    }

    /// Applies a command and forwards the resulting notice to `hooks`.
    pub fn dispatch_with(
        &mut self,
        command: Command,
        hooks: &mut impl BrowserHooks,
    ) -> Option<Notice> {
        let notice = self.dispatch(command)?;
        self.notify(&notice, hooks);
        Some(notice)
    }

    /// Applies a command.
    pub fn dispatch(&mut self, command: Command) -> Option<Notice> {
        match command {
            Command::SetSearch(term) => {
                tracing::debug!(term = %term, "Search term changed");
                self.query.search = term;
                None
            }
            Command::SelectCategory(category) => {
                tracing::debug!(category = category.name(), "Category selected");
                self.query.category = category;
                None
            }
            Command::SetSort(sort) => {
                tracing::debug!(sort = %sort, "Sort key changed");
                self.query.sort = sort;
                None
            }
            Command::SetViewMode(mode) => {
                self.view_mode = mode;
                None
            }
            Command::ToggleLike(id) => {
                if !self.catalog.contains(&id) {
                    return None;
                }
                let liked = self.liked.toggle(&id);
                tracing::debug!(id = %id, liked, "Like toggled");
                Some(Notice::LikeToggled { id, liked })
            }
            Command::Share(id) => self
                .catalog
                .contains(&id)
                .then(|| Notice::ShareRequested(id)),
            Command::Download(id) => self
                .catalog
                .contains(&id)
                .then(|| Notice::DownloadRequested(id)),
            Command::Order(id) => {
                let orderable = self.catalog.get(&id).is_some_and(Item::is_orderable);
                orderable.then(|| {
                    tracing::info!(id = %id, "Order requested");
                    Notice::OrderRequested(id)
                })
            }
            Command::Open(id) => {
                if !self.catalog.contains(&id) {
                    tracing::warn!(id = %id, "Ignoring request to open unknown item");
                    return None;
                }
                tracing::info!(id = %id, "Opening viewer");
                self.navigator.open(id.clone());
                Some(Notice::ItemViewed(id))
            }
            Command::Close => {
                if self.navigator.close() {
                    tracing::info!("Closing viewer");
                    Some(Notice::ViewerClosed)
                } else {
                    None
                }
            }
            Command::Step(direction) => self.step(direction),
            Command::Key(key) => {
                if !self.navigator.is_open() {
                    return None;
                }
                match key {
                    ModalKey::Escape => self.dispatch(Command::Close),
                    ModalKey::ArrowLeft => self.step(Direction::Previous),
                    ModalKey::ArrowRight => self.step(Direction::Next),
                }
            }
        }
    }

    fn step(&mut self, direction: Direction) -> Option<Notice> {
        let visible = compute_visible(&self.catalog, &self.query);
        let target = self.navigator.step(direction, &visible)?;
        tracing::debug!(id = %target.id, ?direction, "Viewer navigated");
        Some(Notice::Navigated(target.id.clone()))
    }

    fn notify(&self, notice: &Notice, hooks: &mut impl BrowserHooks) {
        let lookup = |id: &ItemId| self.catalog.get(id);
        match notice {
            Notice::ItemViewed(id) => {
                if let Some(item) = lookup(id) {
                    hooks.on_item_click(item);
                }
            }
            Notice::LikeToggled { id, liked } => {
                if let Some(item) = lookup(id) {
                    hooks.on_like(item, *liked);
                }
            }
            Notice::ShareRequested(id) => {
                if let Some(item) = lookup(id) {
                    hooks.on_share(item);
                }
            }
            Notice::DownloadRequested(id) => {
                if let Some(item) = lookup(id) {
                    hooks.on_download(item);
                }
            }
            Notice::OrderRequested(id) => {
                if let Some(item) = lookup(id) {
                    hooks.on_order(item);
                }
            }
            Notice::Navigated(_) | Notice::ViewerClosed => {}
        }
    }
}
