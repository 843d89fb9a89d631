// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a searchable, filterable media collection browser built
//! with the Iced GUI framework.
//!
//! The core ([`domain`], [`application`]) is UI-independent: a [`Browser`]
//! owns the query, liked items, view mode and the full-screen navigator over
//! a read-only catalog. The [`app`] and [`ui`] modules put an Iced front end
//! on top, with Fluent localization and a sectioned `settings.toml`.
//!
//! [`Browser`]: application::browser::Browser

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
