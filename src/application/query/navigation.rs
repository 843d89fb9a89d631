// SPDX-License-Identifier: MPL-2.0
//! Modal navigation over the visible set.
//!
//! The [`ModalNavigator`] remembers which item is open in the full-screen
//! viewer. It stores only the identity of the item; stepping looks the item up
//! in the visible set passed by the caller, so filtering or re-sorting while
//! the viewer is open is always reflected by the next step.
//!
//! # Wrap-around
//!
//! `Next` on the last item goes to the first, `Previous` on the first goes to
//! the last. With one item or fewer, stepping does nothing.
//!
//! # Open item outside the visible set
//!
//! The open item can disappear from the visible set when the query changes.
//! It is then treated as sitting just before the first position: `Next`
//! goes to the first visible item and `Previous` to the last one.

use crate::domain::catalog::{Item, ItemId};

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Position snapshot for rendering the viewer's navigation controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Position of the open item in the visible set (0-indexed), if it is visible.
    pub current_index: Option<usize>,
    /// Number of items in the visible set.
    pub visible_count: usize,
    /// Whether stepping can move to another item.
    pub can_step: bool,
}

/// Open/closed state of the full-screen viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalNavigator {
    #[default]
    Closed,
    Open(ItemId),
}

impl ModalNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::Closed
    }

    /// Opens (or replaces) the viewed item.
    pub fn open(&mut self, id: ItemId) {
        *self = ModalNavigator::Open(id);
    }

    /// Closes the viewer. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        matches!(std::mem::take(self), ModalNavigator::Open(_))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, ModalNavigator::Open(_))
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ItemId> {
        match self {
            ModalNavigator::Closed => None,
            ModalNavigator::Open(id) => Some(id),
        }
    }

    /// Returns the item a step would land on, without moving.
    ///
    /// Returns `None` when closed or when the step would not change anything.
    #[must_use]
    pub fn peek<'a>(&self, direction: Direction, visible: &[&'a Item]) -> Option<&'a Item> {
        let current = self.selected()?;
        let total = visible.len();
        let index = visible.iter().position(|item| &item.id == current);

        let target = match index {
            Some(_) if total <= 1 => return None,
            Some(idx) => match direction {
                Direction::Next => (idx + 1) % total,
                Direction::Previous => (idx + total - 1) % total,
            },
            None if total == 0 => return None,
            None => match direction {
                Direction::Next => 0,
                Direction::Previous => total - 1,
            },
        };
        visible.get(target).copied()
    }

    /// Moves to the neighbouring item in `visible`.
    ///
    /// Returns the newly opened item, or `None` if the state did not change.
    pub fn step<'a>(&mut self, direction: Direction, visible: &[&'a Item]) -> Option<&'a Item> {
        let target = self.peek(direction, visible)?;
        *self = ModalNavigator::Open(target.id.clone());
        Some(target)
    }

    /// Builds the navigation snapshot for the given visible set.
    #[must_use]
    pub fn info(&self, visible: &[&Item]) -> NavigationInfo {
        let current_index = self
            .selected()
            .and_then(|id| visible.iter().position(|item| &item.id == id));
        NavigationInfo {
            current_index,
            visible_count: visible.len(),
            can_step: self.is_open() && visible.len() > 1,
        }
    }
}
