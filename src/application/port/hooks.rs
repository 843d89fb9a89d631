// SPDX-License-Identifier: MPL-2.0
//! Outbound notifications of the browser.
//!
//! Embedders implement [`BrowserHooks`] to react to user interactions
//! (analytics, clipboard, download, checkout). Every method has a no-op
//! default, so implementations only override what they need. Hooks are
//! fire-and-forget: they cannot veto or alter the browser's state, and they
//! run after the state change they report.

use crate::domain::catalog::Item;

pub trait BrowserHooks {
    /// An item was opened in the viewer.
    fn on_item_click(&mut self, _item: &Item) {}

    /// An item's liked state was toggled; `liked` is the new state.
    fn on_like(&mut self, _item: &Item, _liked: bool) {}

    fn on_share(&mut self, _item: &Item) {}

    fn on_download(&mut self, _item: &Item) {}

    /// An order was requested. Only called for items with a price.
    fn on_order(&mut self, _item: &Item) {}
}

/// Hooks that ignore every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl BrowserHooks for NoHooks {}
