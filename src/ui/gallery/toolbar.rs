// SPDX-License-Identifier: MPL-2.0
//! Gallery header: title, item count, search, pickers and the view toggle.

use super::{Message, ViewContext};
use crate::application::browser::Browser;
use crate::application::query::{CategoryFilter, SortKey};
use crate::application::view_mode::ViewMode;
use crate::domain::catalog::ALL_CATEGORIES;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Space, Text};
use iced::{Element, Length, Theme};
use std::fmt;

/// Entry of the category picker.
#[derive(Debug, Clone, PartialEq)]
struct CategoryOption {
    filter: CategoryFilter,
    label: String,
}

impl fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Entry of the sort picker.
#[derive(Debug, Clone, PartialEq)]
struct SortOption {
    key: SortKey,
    label: String,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub(super) fn view<'a>(ctx: &ViewContext<'a>, browser: &'a Browser) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let summary = browser.summary();
    let options = browser.options();

    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.title.clone()).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr_with_args(
                "gallery-count",
                &[
                    ("visible", &summary.visible.to_string()),
                    ("total", &summary.total.to_string()),
                ],
            ))
            .size(typography::CAPTION),
        );

    let mut controls = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(heading)
        .push(Space::new().width(Length::Fill));

    if options.show_search {
        controls = controls.push(
            text_input(&i18n.tr("search-placeholder"), &browser.query().search)
                .on_input(Message::SearchChanged)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::SEARCH_WIDTH)),
        );
    }

    if options.show_filters {
        controls = controls
            .push(category_picker(i18n, browser))
            .push(sort_picker(i18n, browser.query().sort));
    }

    if options.show_view_toggle {
        controls = controls.push(view_toggle(i18n, browser.view_mode()));
    }

    Container::new(controls)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::toolbar)
        .into()
}

fn category_options(i18n: &I18n, browser: &Browser) -> Vec<CategoryOption> {
    browser
        .category_options()
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            // Only the first entry is the synthetic "all"; a data category
            // with the same name follows it as a regular filter.
            if index == 0 && name == ALL_CATEGORIES {
                CategoryOption {
                    filter: CategoryFilter::All,
                    label: i18n.tr("filter-category-all"),
                }
            } else {
                CategoryOption {
                    filter: CategoryFilter::Only(name.to_string()),
                    label: name.to_string(),
                }
            }
        })
        .collect()
}

fn category_picker<'a>(i18n: &I18n, browser: &Browser) -> Element<'a, Message> {
    let options = category_options(i18n, browser);
    let selected = options
        .iter()
        .find(|option| option.filter == browser.query().category)
        .cloned();

    pick_list(options, selected, |option| {
        Message::CategorySelected(option.filter)
    })
    .placeholder(i18n.tr("filter-category-label"))
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::PICKER_WIDTH))
    .into()
}

fn sort_picker<'a>(i18n: &I18n, current: SortKey) -> Element<'a, Message> {
    let options: Vec<SortOption> = SortKey::ALL
        .into_iter()
        .map(|key| SortOption {
            key,
            label: i18n.tr(key.i18n_key()),
        })
        .collect();
    let selected = options.iter().find(|option| option.key == current).cloned();

    pick_list(options, selected, |option| Message::SortSelected(option.key))
        .placeholder(i18n.tr("sort-label"))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::PICKER_WIDTH))
        .into()
}

fn view_toggle<'a>(i18n: &I18n, current: ViewMode) -> Element<'a, Message> {
    let toggle = |mode: ViewMode, key: &str| {
        let style: fn(&Theme, button::Status) -> button::Style = if mode == current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .on_press(Message::ViewModeSelected(mode))
            .padding([spacing::XS, spacing::SM])
            .style(style)
    };

    Row::new()
        .spacing(spacing::XXS)
        .push(toggle(ViewMode::Grid, "view-mode-grid"))
        .push(toggle(ViewMode::List, "view-mode-list"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::application::browser::BrowserOptions;
    use crate::domain::catalog::{Catalog, Item};

    #[test]
    fn synthetic_all_comes_first_and_data_all_stays_selectable() {
        let catalog = Catalog::new(vec![
            Item::new("1", "One", "prints"),
            Item::new("2", "Two", "all"),
        ])
        .unwrap();
        let browser = Browser::new(catalog, BrowserOptions::default());
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

        let filters: Vec<CategoryFilter> = category_options(&i18n, &browser)
            .into_iter()
            .map(|option| option.filter)
            .collect();
        assert_eq!(
            filters,
            vec![
                CategoryFilter::All,
                CategoryFilter::Only("prints".into()),
                CategoryFilter::Only("all".into()),
            ]
        );
    }
}
