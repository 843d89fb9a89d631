// SPDX-License-Identifier: MPL-2.0
//! Field validation primitives shared by the forms.
//!
//! Validators never fail; they collect per-field problems into
//! [`FieldErrors`], which maps a field name to the i18n key of its message.
//! An empty map means the data is valid. Each field is checked
//! independently and reports at most one problem.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Optional `+`, a non-zero digit, then up to 15 digits.
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone regex should compile"));

/// Like [`PHONE_PATTERN`] but at least 8 digits in total.
pub static LONG_PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{7,15}$").expect("phone regex should compile"));

/// Letters and spaces, at least two characters.
pub static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]{2,}$").expect("name regex should compile"));

/// Problems found in a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a problem unless the field already has one.
    pub fn insert(&mut self, field: &'static str, message_key: &'static str) {
        self.0.entry(field).or_insert(message_key);
    }

    /// Clears the problem of one field, e.g. when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, key)| (*field, *key))
    }
}

/// Data that can be checked before submission.
pub trait Validate {
    fn validate(&self) -> FieldErrors;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Returns `true` if the value is empty after trimming.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Removes the separators people type in phone numbers.
#[must_use]
pub fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Fluent check of a single field value.
///
/// Rules run in call order and stop at the first failure.
#[derive(Debug)]
pub struct FieldCheck<'a> {
    field: &'static str,
    value: &'a str,
    failed: Option<&'static str>,
    skip: bool,
}

impl<'a> FieldCheck<'a> {
    #[must_use]
    pub fn new(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value,
            failed: None,
            skip: false,
        }
    }

    /// Fails with `message_key` when the value is blank.
    #[must_use]
    pub fn required(mut self, message_key: &'static str) -> Self {
        if self.pending() && is_blank(self.value) {
            self.failed = Some(message_key);
        }
        self
    }

    /// Skips the remaining rules when the value is blank.
    #[must_use]
    pub fn optional(mut self) -> Self {
        if is_blank(self.value) {
            self.skip = true;
        }
        self
    }

    /// Fails when the trimmed value has fewer than `min` characters.
    #[must_use]
    pub fn min_len(mut self, min: usize, message_key: &'static str) -> Self {
        if self.pending() && self.value.trim().chars().count() < min {
            self.failed = Some(message_key);
        }
        self
    }

    /// Fails when the value does not match `pattern`.
    #[must_use]
    pub fn pattern(mut self, pattern: &Regex, message_key: &'static str) -> Self {
        if self.pending() && !pattern.is_match(self.value) {
            self.failed = Some(message_key);
        }
        self
    }

    /// Like [`pattern`](Self::pattern) but after [`strip_separators`].
    #[must_use]
    pub fn pattern_stripped(mut self, pattern: &Regex, message_key: &'static str) -> Self {
        if self.pending() && !pattern.is_match(&strip_separators(self.value)) {
            self.failed = Some(message_key);
        }
        self
    }

    fn pending(&self) -> bool {
        self.failed.is_none() && !self.skip
    }

    /// Records the first failure, if any, into `errors`.
    pub fn report(self, errors: &mut FieldErrors) {
        if let Some(key) = self.failed {
            errors.insert(self.field, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_trims() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn strip_separators_removes_phone_punctuation() {
        assert_eq!(strip_separators("+1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn email_pattern() {
        assert!(EMAIL_PATTERN.is_match("jane@example.com"));
        assert!(!EMAIL_PATTERN.is_match("jane@example"));
        assert!(!EMAIL_PATTERN.is_match("jane doe@example.com"));
    }

    #[test]
    fn phone_patterns() {
        assert!(PHONE_PATTERN.is_match("+1"));
        assert!(!PHONE_PATTERN.is_match("0123"));
        assert!(LONG_PHONE_PATTERN.is_match("+15551234567"));
        assert!(!LONG_PHONE_PATTERN.is_match("1234567"));
    }

    #[test]
    fn first_failure_wins() {
        let mut errors = FieldErrors::new();
        FieldCheck::new("name", "")
            .required("name-required")
            .min_len(2, "name-short")
            .report(&mut errors);
        assert_eq!(errors.get("name"), Some("name-required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn optional_blank_value_skips_rules() {
        let mut errors = FieldErrors::new();
        FieldCheck::new("email", "  ")
            .optional()
            .pattern(&EMAIL_PATTERN, "email-invalid")
            .report(&mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn min_len_counts_trimmed_characters() {
        let mut errors = FieldErrors::new();
        FieldCheck::new("name", " é ")
            .min_len(2, "name-short")
            .report(&mut errors);
        assert_eq!(errors.get("name"), Some("name-short"));
    }

    #[test]
    fn clear_removes_single_field() {
        let mut errors = FieldErrors::new();
        errors.insert("a", "x");
        errors.insert("b", "y");
        errors.clear("a");
        assert_eq!(errors.get("a"), None);
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![("b", "y")]);
    }

    #[test]
    fn insert_keeps_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert("a", "first");
        errors.insert("a", "second");
        assert_eq!(errors.get("a"), Some("first"));
    }
}
