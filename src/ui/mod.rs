// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from a `ViewContext` and reports user input as messages.
//!
//! # Screens
//!
//! - [`gallery`] - Toolbar, item cards and the full-screen viewer
//! - [`order_form`] - Order dialog drawn over the gallery
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod order_form;
pub mod styles;
pub mod theming;
