// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer for the open item.
//!
//! Drawn over the gallery while the navigator is open. Previous/next
//! buttons only appear when stepping can change the item; the keyboard
//! mapping is in [`modal_key`].

use super::cards::{category_badge, tag_row};
use super::{local_image_path, Message};
use crate::application::browser::{Browser, ModalKey};
use crate::application::query::Direction;
use crate::domain::catalog::Item;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{self, key::Named};
use iced::widget::{button, image, opaque, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// Maps a pressed key to a viewer key, if it is one the viewer handles.
#[must_use]
pub fn modal_key(key: &keyboard::Key) -> Option<ModalKey> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(ModalKey::Escape),
        keyboard::Key::Named(Named::ArrowLeft) => Some(ModalKey::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(ModalKey::ArrowRight),
        _ => None,
    }
}

pub(super) fn view<'a>(
    i18n: &'a I18n,
    browser: &'a Browser,
    item: &'a Item,
) -> Element<'a, Message> {
    let info = browser.navigation_info();

    let mut stage = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill);
    if info.can_step {
        stage = stage.push(nav_button("‹", Direction::Previous));
    }
    stage = stage.push(picture(i18n, item));
    if info.can_step {
        stage = stage.push(nav_button("›", Direction::Next));
    }

    let mut footer = Column::new().spacing(spacing::XS).width(Length::Fill);
    if let Some(description) = &item.description {
        footer = footer.push(Text::new(description.as_str()).size(typography::BODY));
    }
    if !item.tags.is_empty() {
        footer = footer.push(tag_row(i18n, &item.tags, 0));
    }
    if let Some(index) = info.current_index {
        let position = i18n.tr_with_args(
            "viewer-position",
            &[
                ("current", &(index + 1).to_string()),
                ("total", &info.visible_count.to_string()),
            ],
        );
        footer = footer.push(
            Container::new(
                Container::new(Text::new(position).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::overlay::indicator(radius::FULL)),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        );
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::VIEWER_MAX_WIDTH)
        .push(header(i18n, browser, item))
        .push(stage)
        .push(footer);

    opaque(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .style(styles::container::backdrop),
    )
}

fn header<'a>(i18n: &I18n, browser: &Browser, item: &'a Item) -> Element<'a, Message> {
    let liked = browser.is_liked(&item.id);
    let heart = if liked { "♥" } else { "♡" };

    let mut meta = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(category_badge(item));
    if let Some(date) = &item.date {
        meta = meta.push(Text::new(date.as_str()).size(typography::CAPTION));
    }

    let title = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_MD))
        .push(meta);

    let overlay_style = styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    );

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(heart).size(typography::TITLE_SM))
                .on_press(Message::ToggleLike(item.id.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::like(liked)),
        )
        .push(
            button(Text::new(i18n.tr("action-share")).size(typography::BODY))
                .on_press(Message::Share(item.id.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(i18n.tr("action-download")).size(typography::BODY))
                .on_press(Message::Download(item.id.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected),
        )
        .push(
            button(
                Text::new("×")
                    .size(typography::TITLE_MD)
                    .align_x(Horizontal::Center),
            )
            .on_press(Message::CloseViewer)
            .width(Length::Fixed(sizing::VIEWER_BUTTON))
            .height(Length::Fixed(sizing::VIEWER_BUTTON))
            .style(overlay_style),
        )
        .into()
}

fn picture<'a>(i18n: &I18n, item: &'a Item) -> Element<'a, Message> {
    match local_image_path(&item.image_url) {
        Some(path) => Container::new(
            image(image::Handle::from_path(path))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => Container::new(Text::new(i18n.tr("card-no-preview")).size(typography::BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::image_placeholder)
            .into(),
    }
}

fn nav_button<'a>(glyph: &'a str, direction: Direction) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_LG)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(Message::Step(direction))
    .width(Length::Fixed(sizing::VIEWER_BUTTON))
    .height(Length::Fixed(sizing::VIEWER_BUTTON))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .into()
}
