// SPDX-License-Identifier: MPL-2.0
//! Order (checkout) form.
//!
//! Every field is required except the notes. The ordered item's title and
//! price travel with the data so the confirmation can repeat them.

use super::validation::{FieldCheck, FieldErrors, Validate, EMAIL_PATTERN, PHONE_PATTERN};
use super::submission::FieldAccess;
use super::{ERR_INVALID_EMAIL, ERR_INVALID_PHONE, ERR_REQUIRED};
use crate::domain::catalog::Item;

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const ADDRESS: &str = "address";
pub const CITY: &str = "city";
pub const POSTAL_CODE: &str = "postal_code";
pub const COUNTRY: &str = "country";
pub const NOTES: &str = "notes";

/// Field names in display order.
pub const FIELDS: [&str; 9] = [
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    PHONE,
    ADDRESS,
    CITY,
    POSTAL_CODE,
    COUNTRY,
    NOTES,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderData {
    pub product_title: String,
    pub product_price: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub notes: String,
}

impl OrderData {
    /// Starts an order for `item`, prefilled with its title and price.
    #[must_use]
    pub fn for_item(item: &Item) -> Self {
        Self {
            product_title: item.title.clone(),
            product_price: item.price.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        match field {
            FIRST_NAME => &self.first_name,
            LAST_NAME => &self.last_name,
            EMAIL => &self.email,
            PHONE => &self.phone,
            ADDRESS => &self.address,
            CITY => &self.city,
            POSTAL_CODE => &self.postal_code,
            COUNTRY => &self.country,
            NOTES => &self.notes,
            _ => "",
        }
    }

    /// Updates one field by name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            FIRST_NAME => &mut self.first_name,
            LAST_NAME => &mut self.last_name,
            EMAIL => &mut self.email,
            PHONE => &mut self.phone,
            ADDRESS => &mut self.address,
            CITY => &mut self.city,
            POSTAL_CODE => &mut self.postal_code,
            COUNTRY => &mut self.country,
            NOTES => &mut self.notes,
            _ => return,
        };
        *slot = value;
    }
}

impl FieldAccess for OrderData {
    fn set_field(&mut self, field: &str, value: String) {
        self.set(field, value);
    }
}

impl Validate for OrderData {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in [FIRST_NAME, LAST_NAME, ADDRESS, CITY, POSTAL_CODE, COUNTRY] {
            FieldCheck::new(field, self.get(field))
                .required(ERR_REQUIRED)
                .report(&mut errors);
        }
        FieldCheck::new(EMAIL, &self.email)
            .required(ERR_REQUIRED)
            .pattern(&EMAIL_PATTERN, ERR_INVALID_EMAIL)
            .report(&mut errors);
        FieldCheck::new(PHONE, &self.phone)
            .required(ERR_REQUIRED)
            .pattern_stripped(&PHONE_PATTERN, ERR_INVALID_PHONE)
            .report(&mut errors);
        errors
    }
}
