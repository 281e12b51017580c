//! Registration form validation

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use super::input::{FormField, FormInput};
use super::rules::{exceeds_length, is_strong_password, is_valid_phone_number};
use crate::config::ValidationConfig;

/// A user-correctable problem with a single form field
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Required")]
    Required,

    #[error("Up to {max} character allowed")]
    LengthExceeded { max: usize },

    #[error("Please enter a valid Israeli phone number")]
    FormatInvalid,

    #[error(
        "Please enter {min}-{max} characters, including at least one uppercase letter and one special character"
    )]
    PolicyViolation { min: usize, max: usize },

    #[error("Passwords don't match.")]
    Mismatch,
}

/// Field errors keyed by field; a missing key means the field is valid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorMap(BTreeMap<FormField, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Message to display for `field`, if it is invalid
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FormField, FieldError> {
        self.0.iter()
    }

    fn record(&mut self, field: FormField, error: Option<FieldError>) {
        if let Some(error) = error {
            self.0.insert(field, error);
        }
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a FormField, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, FormField, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as `{"fieldName": "message", ...}`
impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

/// Validates registration form input
///
/// Every field is checked on every call; within a field the required check
/// comes first. Validation has no side effects.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    config: ValidationConfig,
}

impl FormValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn validate(&self, input: &FormInput) -> ErrorMap {
        let mut errors = ErrorMap::new();

        errors.record(
            FormField::Username,
            self.validate_username(input.username.as_deref()),
        );
        errors.record(
            FormField::PhoneNumber,
            self.validate_phone_number(input.phone_number),
        );
        errors.record(
            FormField::Password,
            self.validate_password(input.password.as_deref()),
        );
        errors.record(
            FormField::PasswordConfirmation,
            self.validate_password_confirmation(
                input.password.as_deref(),
                input.password_confirmation.as_deref(),
            ),
        );

        errors
    }

    pub fn validate_username(&self, username: Option<&str>) -> Option<FieldError> {
        let Some(username) = non_empty(username) else {
            return Some(FieldError::Required);
        };
        let max = self.config.username_max_length;

        exceeds_length(username, max).then_some(FieldError::LengthExceeded { max })
    }

    pub fn validate_phone_number(&self, phone_number: Option<i64>) -> Option<FieldError> {
        // zero counts as unset
        let number = match phone_number {
            None | Some(0) => return Some(FieldError::Required),
            Some(number) => number,
        };

        (!is_valid_phone_number(&number.to_string())).then_some(FieldError::FormatInvalid)
    }

    pub fn validate_password(&self, password: Option<&str>) -> Option<FieldError> {
        let Some(password) = non_empty(password) else {
            return Some(FieldError::Required);
        };
        let min = self.config.password_min_length;
        let max = self.config.password_max_length;

        (!is_strong_password(password, min, max))
            .then_some(FieldError::PolicyViolation { min, max })
    }

    pub fn validate_password_confirmation(
        &self,
        password: Option<&str>,
        confirmation: Option<&str>,
    ) -> Option<FieldError> {
        let Some(confirmation) = non_empty(confirmation) else {
            return Some(FieldError::Required);
        };

        (password != Some(confirmation)).then_some(FieldError::Mismatch)
    }
}

/// Validate with the canonical rule set
pub fn validate(input: &FormInput) -> ErrorMap {
    FormValidator::default().validate(input)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
