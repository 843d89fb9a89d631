// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core catalog types and rules.
//!
//! This module contains pure domain types and value objects. Apart from
//! `chrono` for calendar parsing it has no dependency on external crates,
//! no I/O and no UI types.
//!
//! # Modules
//!
//! - [`catalog`]: Collection types ([`Item`](catalog::Item), [`ItemId`](catalog::ItemId),
//!   [`Catalog`](catalog::Catalog)) and the category universe

pub mod catalog;
