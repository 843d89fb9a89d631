// SPDX-License-Identifier: MPL-2.0
//! Item cards in grid and list layout.

use super::{local_image_path, Message};
use crate::app::config::{CARD_IMAGE_HEIGHT, CARD_TAG_PREVIEW, LIST_THUMBNAIL_WIDTH};
use crate::application::browser::Browser;
use crate::domain::catalog::Item;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Space, Text};
use iced::{mouse, ContentFit, Element, Length};

/// Cards in rows of `columns`; the last row is padded so cards keep their width.
pub(super) fn grid<'a>(
    i18n: &'a I18n,
    browser: &'a Browser,
    items: &[&'a Item],
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::MD);

    for chunk in items.chunks(columns) {
        let mut row = Row::new().spacing(spacing::MD);
        for item in chunk {
            row = row.push(
                Container::new(grid_card(i18n, browser, item)).width(Length::FillPortion(1)),
            );
        }
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.width(Length::Fill).into()
}

/// One full-width row per item.
pub(super) fn list<'a>(
    i18n: &'a I18n,
    browser: &'a Browser,
    items: &[&'a Item],
) -> Element<'a, Message> {
    items
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, item| {
            column.push(list_row(i18n, browser, item))
        })
        .width(Length::Fill)
        .into()
}

fn grid_card<'a>(i18n: &'a I18n, browser: &'a Browser, item: &'a Item) -> Element<'a, Message> {
    let content = Column::new()
        .push(thumbnail(i18n, item, Length::Fill, CARD_IMAGE_HEIGHT))
        .push(details(i18n, browser, item))
        .spacing(spacing::XS);
    clickable(item, content)
}

fn list_row<'a>(i18n: &'a I18n, browser: &'a Browser, item: &'a Item) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::MD)
        .push(thumbnail(
            i18n,
            item,
            Length::Fixed(LIST_THUMBNAIL_WIDTH),
            LIST_THUMBNAIL_WIDTH * 0.75,
        ))
        .push(Container::new(details(i18n, browser, item)).width(Length::Fill));
    clickable(item, content)
}

/// Wraps card content so a click anywhere outside the action buttons opens
/// the viewer.
fn clickable<'a>(item: &'a Item, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let card = Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::card);

    mouse_area(card)
        .on_press(Message::OpenItem(item.id.clone()))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

pub(super) fn thumbnail<'a>(
    i18n: &I18n,
    item: &'a Item,
    width: Length,
    height: f32,
) -> Element<'a, Message> {
    match local_image_path(&item.image_url) {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(width)
            .height(Length::Fixed(height))
            .into(),
        None => Container::new(Text::new(i18n.tr("card-no-preview")).size(typography::CAPTION))
            .center_x(width)
            .center_y(Length::Fixed(height))
            .style(styles::container::image_placeholder)
            .into(),
    }
}

fn details<'a>(i18n: &'a I18n, browser: &'a Browser, item: &'a Item) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XXS)
        .padding([0.0, spacing::XS])
        .push(Text::new(item.title.as_str()).size(typography::TITLE_SM));

    let mut meta = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(category_badge(item));
    if let Some(date) = &item.date {
        meta = meta.push(Text::new(date.as_str()).size(typography::CAPTION));
    }
    body = body.push(meta);

    if let Some(description) = &item.description {
        body = body.push(Text::new(description.as_str()).size(typography::BODY_SM));
    }

    let mut facts = Row::new().spacing(spacing::SM);
    if let Some(price) = &item.price {
        facts = facts.push(
            Text::new(i18n.tr_with_args("card-price", &[("price", price.as_str())]))
                .size(typography::BODY),
        );
    }
    if let Some(size) = &item.size {
        facts = facts.push(
            Text::new(i18n.tr_with_args("card-size", &[("size", size.as_str())]))
                .size(typography::CAPTION),
        );
    }
    body = body.push(facts);

    let (shown, hidden) = item.tag_preview(CARD_TAG_PREVIEW);
    if !shown.is_empty() {
        body = body.push(tag_row(i18n, shown, hidden));
    }

    body.push(actions(i18n, browser, item)).into()
}

pub(super) fn category_badge<'a>(item: &'a Item) -> Element<'a, Message> {
    Container::new(Text::new(item.category.as_str()).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::category_badge)
        .into()
}

pub(super) fn tag_row<'a>(i18n: &I18n, tags: &'a [String], hidden: usize) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for tag in tags {
        row = row.push(
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::tag_chip),
        );
    }
    if hidden > 0 {
        row = row.push(
            Text::new(i18n.tr_with_args("card-more-tags", &[("count", &hidden.to_string())]))
                .size(typography::CAPTION),
        );
    }
    row.wrap().into()
}

fn actions<'a>(i18n: &I18n, browser: &Browser, item: &'a Item) -> Element<'a, Message> {
    let id = &item.id;
    let liked = browser.is_liked(id);
    let heart = if liked { "♥" } else { "♡" };

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(heart).size(typography::BODY_LG))
                .on_press(Message::ToggleLike(id.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::like(liked)),
        )
        .push(
            button(Text::new(i18n.tr("action-share")).size(typography::BODY_SM))
                .on_press(Message::Share(id.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(i18n.tr("action-download")).size(typography::BODY_SM))
                .on_press(Message::Download(id.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected),
        );

    if item.is_orderable() {
        row = row.push(Space::new().width(Length::Fill)).push(
            button(Text::new(i18n.tr("action-order")).size(typography::BODY_SM))
                .on_press(Message::Order(id.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary),
        );
    }

    row.into()
}
