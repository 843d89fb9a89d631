// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the gallery (with its viewer), the order dialog
//! when open, and the toast overlay.

use super::Message;
use crate::application::browser::Browser;
use crate::forms::order::OrderData;
use crate::forms::submission::FormState;
use crate::i18n::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::order_form;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: Option<&'a Browser>,
    pub order: Option<&'a FormState<OrderData>>,
    pub notifications: &'a Manager,
    pub title: String,
    pub window_width: f32,
    pub is_loading: bool,
}

/// Renders the application.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        browser: ctx.browser,
        title: ctx.title,
        window_width: ctx.window_width,
        is_loading: ctx.is_loading,
    })
    .map(Message::Gallery);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(gallery);

    if let Some(form) = ctx.order {
        layers = layers.push(
            order_form::view(order_form::ViewContext {
                i18n: ctx.i18n,
                form,
            })
            .map(Message::OrderForm),
        );
    }

    if ctx.notifications.has_notifications() {
        layers = layers
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
