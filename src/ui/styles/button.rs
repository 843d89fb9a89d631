// SPDX-License-Identifier: MPL-2.0
//! Button styles shared by the toolbar, cards, viewer and dialogs.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn rounded(color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius::SM.into(),
    }
}

/// Main call to action (submit, open catalog).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: rounded(palette::PRIMARY_600),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: rounded(palette::PRIMARY_500),
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme, status),
    }
}

/// Grayed out, e.g. the submit button while a submission runs.
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    let fill = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::GRAY_400,
        border: rounded(palette::GRAY_400),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Active entry of a toggle group (current view mode).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Inactive entry of a toggle group and secondary actions.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let (fill, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(fill)),
            text_color,
            border: rounded(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_dark {
                Color::from_rgb(0.35, 0.35, 0.35)
            } else {
                palette::GRAY_200
            })),
            text_color,
            border: rounded(palette::PRIMARY_500),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(theme, status),
    }
}

/// Borderless icon button; the heart turns red once liked.
pub fn like(liked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let text_color = if liked {
            scheme.liked
        } else {
            scheme.text_secondary
        };
        let background = matches!(status, button::Status::Hovered | button::Status::Pressed)
            .then(|| {
                Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                })
            });
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Translucent round buttons over the viewer image (close, previous, next).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
