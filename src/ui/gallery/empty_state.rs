// SPDX-License-Identifier: MPL-2.0
//! Placeholders for an empty visible set and a missing catalog.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

/// Shown when the query hides every item.
pub(super) fn no_results<'a>(i18n: &I18n) -> Element<'a, Message> {
    centered(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("empty-title")).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr("empty-hint")).size(typography::BODY)),
    )
}

/// Shown before a catalog is available.
pub(super) fn no_catalog<'a>(i18n: &I18n, is_loading: bool) -> Element<'a, Message> {
    if is_loading {
        return centered(Text::new(i18n.tr("catalog-loading")).size(typography::BODY_LG));
    }

    centered(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("no-catalog-title")).size(typography::TITLE_MD))
            .push(Text::new(i18n.tr("no-catalog-hint")).size(typography::BODY))
            .push(
                button(Text::new(i18n.tr("no-catalog-open")).size(typography::BODY))
                    .on_press(Message::OpenCatalogDialog)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            ),
    )
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .padding(spacing::XXL)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
