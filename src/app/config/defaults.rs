// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Browser**: Gallery toolbar and initial query
//! - **Layout**: Responsive grid breakpoints and card sizing
//! - **Notifications**: Toast durations

use std::time::Duration;

// ==========================================================================
// Browser Defaults
// ==========================================================================

/// Whether the category and sort pickers are shown.
pub const DEFAULT_SHOW_FILTERS: bool = true;

/// Whether the search field is shown.
pub const DEFAULT_SHOW_SEARCH: bool = true;

/// Whether the grid/list toggle is shown.
pub const DEFAULT_SHOW_VIEW_TOGGLE: bool = true;

/// Whether the items' advisory `liked` flags seed the liked store.
pub const DEFAULT_SEED_LIKES_FROM_ITEMS: bool = false;

/// Number of tags shown on a card before "+N more".
pub const CARD_TAG_PREVIEW: usize = 3;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window widths (logical pixels) at which the grid gains a column.
///
/// Below the first breakpoint the grid has one column; at or above the
/// last one it has `GRID_BREAKPOINTS.len() + 1` columns.
pub const GRID_BREAKPOINTS: [f32; 3] = [640.0, 1024.0, 1280.0];

/// Initial window size.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest usable window size.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Height of a card's image in grid mode.
pub const CARD_IMAGE_HEIGHT: f32 = 200.0;

/// Width of an item's thumbnail in list mode.
pub const LIST_THUMBNAIL_WIDTH: f32 = 160.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success and info toasts.
pub const TOAST_SHORT: Duration = Duration::from_secs(3);

/// Auto-dismiss delay for warning toasts.
pub const TOAST_LONG: Duration = Duration::from_secs(5);

/// Maximum number of toasts on screen; extra ones wait in a queue.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(CARD_TAG_PREVIEW > 0);

    // Breakpoints must be strictly ascending
    let mut i = 1;
    while i < GRID_BREAKPOINTS.len() {
        assert!(GRID_BREAKPOINTS[i] > GRID_BREAKPOINTS[i - 1]);
        i += 1;
    }
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);

    assert!(TOAST_LONG.as_millis() >= TOAST_SHORT.as_millis());
    assert!(MAX_VISIBLE_TOASTS > 0);
};
