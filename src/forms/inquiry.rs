// SPDX-License-Identifier: MPL-2.0
//! Generic modal forms driven by a field schema.
//!
//! An [`InquiryKind`] selects one of the preset schemas (contact, newsletter,
//! feedback). Each [`FieldSpec`] says whether the field is required, which
//! pattern a filled value must match, and for selects which values are
//! allowed.

use super::submission::{simulate, FieldAccess};
use super::validation::{
    is_blank, FieldErrors, Validate, EMAIL_PATTERN, NAME_PATTERN, PHONE_PATTERN,
};
use super::{
    ERR_INVALID_CHOICE, ERR_INVALID_EMAIL, ERR_INVALID_NAME, ERR_INVALID_PHONE, ERR_REQUIRED,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

/// Artificial latency of a simulated inquiry submission.
pub const INQUIRY_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    Contact,
    Newsletter,
    Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    TextArea,
    Select(&'static [&'static str]),
    Checkbox,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub pattern: Option<(&'static LazyLock<Regex>, &'static str)>,
}

impl FieldSpec {
    fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
            pattern: None,
        }
    }

    fn with_pattern(
        mut self,
        pattern: &'static LazyLock<Regex>,
        message_key: &'static str,
    ) -> Self {
        self.pattern = Some((pattern, message_key));
        self
    }

    /// i18n key of the field label.
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("inquiry-field-{}", self.name.replace('_', "-"))
    }
}

const SUBJECTS: &[&str] = &["general", "support", "sales", "partnership", "other"];
const INTERESTS: &[&str] = &["technology", "design", "business", "lifestyle", "all"];
const RATINGS: &[&str] = &["excellent", "good", "average", "poor"];

impl InquiryKind {
    /// Field schema in display order.
    #[must_use]
    pub fn fields(self) -> Vec<FieldSpec> {
        match self {
            InquiryKind::Contact => vec![
                FieldSpec::new("name", FieldKind::Text, true)
                    .with_pattern(&NAME_PATTERN, ERR_INVALID_NAME),
                FieldSpec::new("email", FieldKind::Email, true)
                    .with_pattern(&EMAIL_PATTERN, ERR_INVALID_EMAIL),
                FieldSpec::new("phone", FieldKind::Phone, false)
                    .with_pattern(&PHONE_PATTERN, ERR_INVALID_PHONE),
                FieldSpec::new("subject", FieldKind::Select(SUBJECTS), true),
                FieldSpec::new("message", FieldKind::TextArea, true),
            ],
            InquiryKind::Newsletter => vec![
                FieldSpec::new("email", FieldKind::Email, true)
                    .with_pattern(&EMAIL_PATTERN, ERR_INVALID_EMAIL),
                FieldSpec::new("name", FieldKind::Text, false),
                FieldSpec::new("interests", FieldKind::Select(INTERESTS), false),
                FieldSpec::new("terms", FieldKind::Checkbox, true),
            ],
            InquiryKind::Feedback => vec![
                FieldSpec::new("name", FieldKind::Text, true),
                FieldSpec::new("email", FieldKind::Email, true)
                    .with_pattern(&EMAIL_PATTERN, ERR_INVALID_EMAIL),
                FieldSpec::new("rating", FieldKind::Select(RATINGS), true),
                FieldSpec::new("feedback", FieldKind::TextArea, true),
            ],
        }
    }

    /// i18n key of the submit button label.
    #[must_use]
    pub fn submit_key(self) -> &'static str {
        match self {
            InquiryKind::Contact => "inquiry-submit-contact",
            InquiryKind::Newsletter => "inquiry-submit-newsletter",
            InquiryKind::Feedback => "inquiry-submit-feedback",
        }
    }
}

/// Values entered in an inquiry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryData {
    kind: InquiryKind,
    text: BTreeMap<&'static str, String>,
    checked: BTreeMap<&'static str, bool>,
}

impl InquiryData {
    #[must_use]
    pub fn new(kind: InquiryKind) -> Self {
        Self {
            kind,
            text: BTreeMap::new(),
            checked: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> InquiryKind {
        self.kind
    }

    /// Sets a text, select or textarea value. Names outside the schema are ignored.
    pub fn set_text(&mut self, field: &str, value: String) {
        if let Some(spec) = self.spec(field) {
            self.text.insert(spec.name, value);
        }
    }

    /// Sets a checkbox. Names outside the schema are ignored.
    pub fn set_checked(&mut self, field: &str, checked: bool) {
        if let Some(spec) = self.spec(field) {
            self.checked.insert(spec.name, checked);
        }
    }

    #[must_use]
    pub fn text(&self, field: &str) -> &str {
        self.text.get(field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_checked(&self, field: &str) -> bool {
        self.checked.get(field).copied().unwrap_or(false)
    }

    fn spec(&self, field: &str) -> Option<FieldSpec> {
        self.kind.fields().into_iter().find(|spec| spec.name == field)
    }
}

impl FieldAccess for InquiryData {
    fn set_field(&mut self, field: &str, value: String) {
        self.set_text(field, value);
    }
}

impl Validate for InquiryData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for spec in self.kind.fields() {
            if spec.kind == FieldKind::Checkbox {
                if spec.required && !self.is_checked(spec.name) {
                    errors.insert(spec.name, ERR_REQUIRED);
                }
                continue;
            }

            let value = self.text(spec.name);
            if is_blank(value) {
                if spec.required {
                    errors.insert(spec.name, ERR_REQUIRED);
                }
                continue;
            }
            if let FieldKind::Select(options) = spec.kind {
                if !options.contains(&value) {
                    errors.insert(spec.name, ERR_INVALID_CHOICE);
                }
            }
            if let Some((pattern, message_key)) = spec.pattern {
                if !pattern.is_match(value) {
                    errors.insert(spec.name, message_key);
                }
            }
        }
        errors
    }
}

/// Sends an inquiry. Resolves after [`INQUIRY_SUBMIT_DELAY`].
pub async fn submit(data: InquiryData) -> InquiryData {
    tracing::debug!(kind = ?data.kind, "Submitting inquiry");
    simulate(data, INQUIRY_SUBMIT_DELAY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::{Effect, FormState, Message, SUBMIT_DELAY};

    #[test]
    fn empty_contact_inquiry_lists_required_fields() {
        let errors = InquiryData::new(InquiryKind::Contact).validate();
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["email", "message", "name", "subject"]);
    }

    #[test]
    fn contact_name_must_be_letters() {
        let mut data = InquiryData::new(InquiryKind::Contact);
        data.set_text("name", "R2D2".into());
        assert_eq!(data.validate().get("name"), Some(ERR_INVALID_NAME));
    }

    #[test]
    fn optional_phone_is_checked_when_filled() {
        let mut data = InquiryData::new(InquiryKind::Contact);
        data.set_text("name", "Jane".into());
        data.set_text("email", "jane@example.com".into());
        data.set_text("subject", "sales".into());
        data.set_text("message", "Hello".into());
        assert!(data.is_valid());

        data.set_text("phone", "0000".into());
        assert_eq!(data.validate().get("phone"), Some(ERR_INVALID_PHONE));
    }

    #[test]
    fn newsletter_requires_terms() {
        let mut data = InquiryData::new(InquiryKind::Newsletter);
        data.set_text("email", "jane@example.com".into());
        assert_eq!(data.validate().get("terms"), Some(ERR_REQUIRED));
        data.set_checked("terms", true);
        assert!(data.is_valid());
    }

    #[test]
    fn select_rejects_unknown_option() {
        let mut data = InquiryData::new(InquiryKind::Feedback);
        data.set_text("name", "Jane".into());
        data.set_text("email", "jane@example.com".into());
        data.set_text("rating", "stellar".into());
        data.set_text("feedback", "Great".into());
        assert_eq!(data.validate().get("rating"), Some(ERR_INVALID_CHOICE));
    }

    #[test]
    fn fields_outside_schema_are_ignored() {
        let mut data = InquiryData::new(InquiryKind::Newsletter);
        data.set_text("subject", "sales".into());
        assert_eq!(data.text("subject"), "");
    }

    #[test]
    fn label_keys_use_dashes() {
        let spec = FieldSpec::new("postal_code", FieldKind::Text, true);
        assert_eq!(spec.label_key(), "inquiry-field-postal-code");
    }

    #[tokio::test(start_paused = true)]
    async fn newsletter_submission_completes_after_inquiry_delay() {
        let mut data = InquiryData::new(InquiryKind::Newsletter);
        data.set_text("email", "jane@example.com".into());
        data.set_checked("terms", true);
        let mut form = FormState::new(data.clone());
        assert_eq!(form.handle(Message::Submit), Effect::StartSubmission);

        let start = tokio::time::Instant::now();
        let sent = submit(data.clone()).await;
        let elapsed = start.elapsed();
        assert_eq!(sent, data);
        assert!(elapsed >= INQUIRY_SUBMIT_DELAY);
        assert!(elapsed < SUBMIT_DELAY);

        assert_eq!(form.handle(Message::Finished), Effect::Submitted);
    }
}
