// SPDX-License-Identifier: MPL-2.0
//! Order dialog shown over the gallery.
//!
//! Renders a [`FormState<OrderData>`] and emits the generic form
//! [`Message`]s; the application feeds them back through
//! [`FormState::handle`] and runs the simulated submission.

use crate::forms::order::{OrderData, FIELDS, NOTES};
use crate::forms::submission::{FormState, Message, SubmissionState};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{
    button, opaque, scrollable, text, text_input, Column, Container, Row, Space, Text,
};
use iced::{Element, Length, Theme};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState<OrderData>,
}

/// i18n key of a field label, e.g. `order-field-postal-code`.
#[must_use]
pub fn label_key(field: &str) -> String {
    format!("order-field-{}", field.replace('_', "-"))
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let data = &ctx.form.data;
    let i18n = ctx.i18n;

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr_with_args(
                "order-dialog-title",
                &[("title", data.product_title.as_str())],
            ))
            .size(typography::TITLE_MD),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "card-price",
                &[("price", data.product_price.as_str())],
            ))
            .size(typography::BODY_LG),
        );

    content = match ctx.form.state() {
        SubmissionState::Submitted => content
            .push(Text::new(i18n.tr("order-success")).size(typography::BODY_LG))
            .push(
                Row::new().push(Space::new().width(Length::Fill)).push(
                    button(Text::new(i18n.tr("order-close")))
                        .on_press(Message::Close)
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::primary),
                ),
            ),
        SubmissionState::Idle | SubmissionState::Submitting => {
            content.push(fields(ctx)).push(buttons(ctx))
        }
    };

    let dialog = Container::new(scrollable(content.padding(spacing::LG)))
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .style(styles::container::panel);

    opaque(
        Container::new(dialog)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::backdrop),
    )
}

fn fields<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let editable = !ctx.form.is_submitting();

    FIELDS
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, &field| {
            let required = field != NOTES;
            let mut label = ctx.i18n.tr(&label_key(field));
            if required {
                label.push_str(" *");
            }

            let mut input = text_input("", ctx.form.data.get(field)).padding(spacing::XS);
            if editable {
                input = input.on_input(move |value| Message::FieldChanged(field, value));
            }

            let mut entry = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(label).size(typography::BODY_SM))
                .push(input);
            if let Some(error_key) = ctx.form.errors().get(field) {
                entry = entry.push(
                    Text::new(ctx.i18n.tr(error_key))
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::ERROR_500),
                        }),
                );
            }
            column.push(entry)
        })
        .into()
}

fn buttons<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let submitting = ctx.form.is_submitting();

    let cancel = button(Text::new(ctx.i18n.tr("order-cancel")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);
    let cancel = if submitting {
        cancel
    } else {
        cancel.on_press(Message::Close)
    };

    let submit_label = if submitting {
        ctx.i18n.tr("order-submitting")
    } else {
        ctx.i18n.tr("order-submit")
    };
    let submit = button(Text::new(submit_label))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    let submit = if submitting {
        submit
    } else {
        submit.on_press(Message::Submit)
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(cancel)
        .push(submit)
        .width(Length::Fill)
        .into()
}
