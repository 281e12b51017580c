//! Form input types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::user::UserDetails;

/// Fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Username,
    PhoneNumber,
    Password,
    PasswordConfirmation,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        Self::Username,
        Self::PhoneNumber,
        Self::Password,
        Self::PasswordConfirmation,
    ];

    /// Name of the field as it appears in form payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::PhoneNumber => "phoneNumber",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate values currently being edited
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    pub username: Option<String>,
    pub phone_number: Option<i64>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: i64) -> Self {
        self.phone_number = Some(phone_number);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_password_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(confirmation.into());
        self
    }

    /// The subset of the input that gets committed to the user store
    pub fn details(&self) -> UserDetails {
        UserDetails {
            username: self.username.clone(),
            phone_number: self.phone_number,
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = FormField::ALL.iter().map(FormField::as_str).collect();
        assert_eq!(
            names,
            ["username", "phoneNumber", "password", "passwordConfirmation"]
        );
        assert_eq!(FormField::PhoneNumber.to_string(), "phoneNumber");
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let input: FormInput = serde_json::from_str(
            r#"{
                "username": "elkana",
                "phoneNumber": 548088924,
                "password": "qweQWE!",
                "passwordConfirmation": "qweQWE!"
            }"#,
        )
        .unwrap();

        assert_eq!(
            input,
            FormInput::new()
                .with_username("elkana")
                .with_phone_number(548088924)
                .with_password("qweQWE!")
                .with_password_confirmation("qweQWE!")
        );
    }

    #[test]
    fn test_deserialize_missing_fields_as_unset() {
        let input: FormInput = serde_json::from_str(r#"{"username": "elkana"}"#).unwrap();

        assert_eq!(input.username.as_deref(), Some("elkana"));
        assert!(input.phone_number.is_none());
        assert!(input.password_confirmation.is_none());
    }

    #[test]
    fn test_details_drop_confirmation() {
        let input = FormInput::new()
            .with_username("a")
            .with_phone_number(1)
            .with_password("p")
            .with_password_confirmation("q");

        assert_eq!(input.details(), UserDetails::new("a", 1, "p"));
    }
}
