// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: header, toolbar, item cards and the full-screen viewer.
//!
//! The screen is stateless; everything it shows comes from the
//! [`Browser`]. User input becomes a [`Message`], [`update`] applies it to
//! the browser and returns an [`Event`] for the application to act on
//! (toasts, clipboard, dialogs).

mod cards;
mod empty_state;
mod toolbar;
mod viewer;

pub use viewer::modal_key;

use crate::app::config::GRID_BREAKPOINTS;
use crate::application::browser::{Browser, Command, ModalKey, Notice};
use crate::application::query::{CategoryFilter, Direction, SortKey};
use crate::application::view_mode::ViewMode;
use crate::domain::catalog::ItemId;
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};
use std::path::Path;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `None` until a catalog has been loaded.
    pub browser: Option<&'a Browser>,
    pub title: String,
    pub window_width: f32,
    pub is_loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    CategorySelected(CategoryFilter),
    SortSelected(SortKey),
    ViewModeSelected(ViewMode),
    ToggleLike(ItemId),
    Share(ItemId),
    Download(ItemId),
    Order(ItemId),
    OpenItem(ItemId),
    CloseViewer,
    Step(Direction),
    Key(ModalKey),
    OpenCatalogDialog,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Notice(Notice),
    OpenCatalogDialog,
}

/// Applies a gallery message to the browser.
pub fn update(browser: &mut Browser, message: Message) -> Event {
    let command = match message {
        Message::OpenCatalogDialog => return Event::OpenCatalogDialog,
        Message::CategorySelected(category) => Command::SelectCategory(category),
        Message::SearchChanged(term) => Command::SetSearch(term),
        Message::SortSelected(sort) => Command::SetSort(sort),
        Message::ViewModeSelected(mode) => Command::SetViewMode(mode),
        Message::ToggleLike(id) => Command::ToggleLike(id),
        Message::Share(id) => Command::Share(id),
        Message::Download(id) => Command::Download(id),
        Message::Order(id) => Command::Order(id),
        Message::OpenItem(id) => Command::Open(id),
        Message::CloseViewer => Command::Close,
        Message::Step(direction) => Command::Step(direction),
        Message::Key(key) => Command::Key(key),
    };
    browser
        .dispatch(command)
        .map_or(Event::None, Event::Notice)
}

/// Render the gallery, with the viewer on top when an item is open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(browser) = ctx.browser else {
        return empty_state::no_catalog(ctx.i18n, ctx.is_loading);
    };

    let header = toolbar::view(&ctx, browser);

    let visible = browser.visible();
    let body: Element<'a, Message> = if visible.is_empty() {
        empty_state::no_results(ctx.i18n)
    } else {
        let cards = match browser.view_mode() {
            ViewMode::Grid => {
                cards::grid(ctx.i18n, browser, &visible, columns_for_width(ctx.window_width))
            }
            ViewMode::List => cards::list(ctx.i18n, browser, &visible),
        };
        scrollable(Container::new(cards).padding(spacing::MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let page = Column::new()
        .push(header)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    match browser.selected_item() {
        Some(item) => Stack::new()
            .push(page)
            .push(viewer::view(ctx.i18n, browser, item))
            .into(),
        None => page.into(),
    }
}

/// Number of grid columns for a window width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    1 + GRID_BREAKPOINTS
        .iter()
        .take_while(|breakpoint| width >= **breakpoint)
        .count()
}

/// Local file behind an item's image, if it is not a remote URL.
#[must_use]
pub fn local_image_path(image_url: &str) -> Option<&Path> {
    if image_url.is_empty() {
        return None;
    }
    if let Some(path) = image_url.strip_prefix("file://") {
        return Some(Path::new(path));
    }
    (!image_url.contains("://")).then(|| Path::new(image_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::browser::BrowserOptions;
    use crate::domain::catalog::{Catalog, Item};

    fn browser() -> Browser {
        let catalog = Catalog::new(vec![
            Item::new("a", "Alpha", "x").with_price("10"),
            Item::new("b", "Beta", "y"),
        ])
        .unwrap();
        Browser::new(catalog, BrowserOptions::default())
    }

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for_width(360.0), 1);
        assert_eq!(columns_for_width(639.9), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(1279.0), 3);
        assert_eq!(columns_for_width(1280.0), 4);
        assert_eq!(columns_for_width(2560.0), 4);
    }

    #[test]
    fn local_paths_are_recognized() {
        assert_eq!(local_image_path("img/a.jpg"), Some(Path::new("img/a.jpg")));
        assert_eq!(
            local_image_path("file:///tmp/a.jpg"),
            Some(Path::new("/tmp/a.jpg"))
        );
        assert_eq!(local_image_path("https://example.com/a.jpg"), None);
        assert_eq!(local_image_path(""), None);
    }

    #[test]
    fn update_forwards_notices() {
        let mut browser = browser();
        let event = update(&mut browser, Message::OpenItem(ItemId::new("a")));
        assert_eq!(event, Event::Notice(Notice::ItemViewed(ItemId::new("a"))));

        let event = update(&mut browser, Message::Key(ModalKey::ArrowRight));
        assert!(matches!(event, Event::Notice(Notice::Navigated(_))));

        let event = update(&mut browser, Message::CloseViewer);
        assert_eq!(event, Event::Notice(Notice::ViewerClosed));
    }

    #[test]
    fn category_selection_filters_items() {
        let mut browser = browser();
        let event = update(
            &mut browser,
            Message::CategorySelected(CategoryFilter::Only("y".into())),
        );
        assert_eq!(event, Event::None);
        assert_eq!(browser.summary().visible, 1);

        update(&mut browser, Message::CategorySelected(CategoryFilter::All));
        assert_eq!(browser.summary().visible, 2);
    }

    #[test]
    fn query_messages_produce_no_event() {
        let mut browser = browser();
        assert_eq!(
            update(&mut browser, Message::SearchChanged("alp".into())),
            Event::None
        );
        assert_eq!(browser.summary().visible, 1);
        assert_eq!(
            update(&mut browser, Message::ViewModeSelected(ViewMode::List)),
            Event::None
        );
        assert_eq!(browser.view_mode(), ViewMode::List);
    }

    #[test]
    fn open_catalog_is_escalated() {
        let mut browser = browser();
        assert_eq!(
            update(&mut browser, Message::OpenCatalogDialog),
            Event::OpenCatalogDialog
        );
    }
}
