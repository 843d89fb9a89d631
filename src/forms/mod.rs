// SPDX-License-Identifier: MPL-2.0
//! Form data, validation and simulated submission.
//!
//! - [`validation`]: Field rules and the [`FieldErrors`](validation::FieldErrors) map
//! - [`contact`]: Call-back request form
//! - [`order`]: Checkout form opened from a priced item
//! - [`inquiry`]: Schema-driven contact/newsletter/feedback forms
//! - [`submission`]: Idle → submitting → submitted lifecycle
//!
//! Validation messages are i18n keys; the UI translates them.

pub mod contact;
pub mod inquiry;
pub mod order;
pub mod submission;
pub mod validation;

pub const ERR_REQUIRED: &str = "form-error-required";
pub const ERR_TOO_SHORT: &str = "form-error-too-short";
pub const ERR_INVALID_EMAIL: &str = "form-error-invalid-email";
pub const ERR_INVALID_PHONE: &str = "form-error-invalid-phone";
pub const ERR_INVALID_NAME: &str = "form-error-invalid-name";
pub const ERR_INVALID_CHOICE: &str = "form-error-invalid-choice";
