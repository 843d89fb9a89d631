// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`hooks`]: Outbound interaction notifications ([`BrowserHooks`])
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles)
//! - No `async fn`; callers that need async work return an Iced `Task`

pub mod hooks;

pub use hooks::{BrowserHooks, NoHooks};
