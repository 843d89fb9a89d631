// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! This module contains the read-only derivations over the catalog.
//!
//! # Available Services
//!
//! - [`visible`]: Filter and sort pipeline (`compute_visible`)
//! - [`navigation`]: Viewer navigation over the visible set (`ModalNavigator`)
//!
//! # Design Notes
//!
//! Nothing here owns the catalog. The visible set borrows from it and is
//! recomputed on demand, so it can never be stale.

pub mod navigation;
pub mod visible;

// Re-export main types
pub use navigation::{Direction, ModalNavigator, NavigationInfo};
pub use visible::{compute_visible, CategoryFilter, QueryState, SortKey};
