// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains the code that touches the file system and turns
//! external formats into domain types.
//!
//! # Available Adapters
//!
//! - [`catalog_file`]: TOML catalog files (sync and async loading)

pub mod catalog_file;
