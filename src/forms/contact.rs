// SPDX-License-Identifier: MPL-2.0
//! Contact (call-back request) form.

use super::validation::{FieldCheck, FieldErrors, Validate, EMAIL_PATTERN, LONG_PHONE_PATTERN};
use super::submission::FieldAccess;
use super::{ERR_INVALID_EMAIL, ERR_INVALID_PHONE, ERR_REQUIRED, ERR_TOO_SHORT};

pub const FULL_NAME: &str = "full_name";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactData {
    pub full_name: String,
    pub phone: String,
    /// Optional; validated only when filled in.
    pub email: String,
}

impl ContactData {
    /// Updates one field by name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            FULL_NAME => self.full_name = value,
            PHONE => self.phone = value,
            EMAIL => self.email = value,
            _ => {}
        }
    }
}

impl FieldAccess for ContactData {
    fn set_field(&mut self, field: &str, value: String) {
        self.set(field, value);
    }
}

impl Validate for ContactData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        FieldCheck::new(FULL_NAME, &self.full_name)
            .required(ERR_REQUIRED)
            .min_len(2, ERR_TOO_SHORT)
            .report(&mut errors);
        FieldCheck::new(PHONE, &self.phone)
            .required(ERR_REQUIRED)
            .pattern_stripped(&LONG_PHONE_PATTERN, ERR_INVALID_PHONE)
            .report(&mut errors);
        FieldCheck::new(EMAIL, &self.email)
            .optional()
            .pattern(&EMAIL_PATTERN, ERR_INVALID_EMAIL)
            .report(&mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactData {
        ContactData {
            full_name: "Jane Doe".into(),
            phone: "+1 (555) 123-4567".into(),
            email: String::new(),
        }
    }

    #[test]
    fn valid_data_has_no_errors() {
        assert!(valid().is_valid());
    }

    #[test]
    fn empty_form_reports_required_fields_only() {
        let errors = ContactData::default().validate();
        assert_eq!(errors.get(FULL_NAME), Some(ERR_REQUIRED));
        assert_eq!(errors.get(PHONE), Some(ERR_REQUIRED));
        assert_eq!(errors.get(EMAIL), None);
    }

    #[test]
    fn single_character_name_is_too_short() {
        let data = ContactData {
            full_name: " J ".into(),
            ..valid()
        };
        assert_eq!(data.validate().get(FULL_NAME), Some(ERR_TOO_SHORT));
    }

    #[test]
    fn short_phone_is_invalid() {
        let data = ContactData {
            phone: "555-1234".into(),
            ..valid()
        };
        assert_eq!(data.validate().get(PHONE), Some(ERR_INVALID_PHONE));
    }

    #[test]
    fn filled_email_must_match() {
        let mut data = valid();
        data.set(EMAIL, "not-an-email".into());
        assert_eq!(data.validate().get(EMAIL), Some(ERR_INVALID_EMAIL));
        data.set(EMAIL, "jane@example.com".into());
        assert!(data.is_valid());
    }
}
