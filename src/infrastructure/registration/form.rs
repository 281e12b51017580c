//! Registration form controller
//!
//! Drives the form life cycle independently of any presentation layer:
//! field edits re-run validation and a submit commits to the user store only
//! when no field has an error.

use thiserror::Error;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::registration::{ErrorMap, FormInput, FormValidator};
use crate::domain::user::{UserDetails, UserStore};

/// Errors returned by [`RegistrationForm::submit`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(ErrorMap),
}

/// Registration form bound to a user store
#[derive(Debug)]
pub struct RegistrationForm<S: UserStore> {
    validator: FormValidator,
    store: S,
    values: FormInput,
    errors: ErrorMap,
}

impl<S: UserStore> RegistrationForm<S> {
    /// Create an empty form
    pub fn new(validator: FormValidator, store: S) -> Self {
        Self::with_values(validator, store, FormInput::default())
    }

    /// Create a form using the validation bounds from `config`
    pub fn from_config(config: &AppConfig, store: S) -> Self {
        Self::new(FormValidator::new(config.validation.clone()), store)
    }

    /// Create a form prefilled with `values`
    pub fn with_values(validator: FormValidator, store: S, values: FormInput) -> Self {
        let errors = validator.validate(&values);

        Self {
            validator,
            store,
            values,
            errors,
        }
    }

    pub fn values(&self) -> &FormInput {
        &self.values
    }

    /// Errors for the current values
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_username(&mut self, username: Option<String>) -> &ErrorMap {
        self.values.username = username;
        self.revalidate()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<i64>) -> &ErrorMap {
        self.values.phone_number = phone_number;
        self.revalidate()
    }

    pub fn set_password(&mut self, password: Option<String>) -> &ErrorMap {
        self.values.password = password;
        self.revalidate()
    }

    pub fn set_password_confirmation(&mut self, confirmation: Option<String>) -> &ErrorMap {
        self.values.password_confirmation = confirmation;
        self.revalidate()
    }

    /// Replace every value at once
    pub fn set_values(&mut self, values: FormInput) -> &ErrorMap {
        self.values = values;
        self.revalidate()
    }

    /// Clear the form values. The store keeps its contents.
    pub fn reset(&mut self) {
        self.set_values(FormInput::default());
    }

    /// Validate and, when every field is valid, commit to the store
    pub fn submit(&mut self) -> Result<UserDetails, SubmitError> {
        self.revalidate();

        if !self.errors.is_empty() {
            debug!(
                invalid_fields = self.errors.len(),
                "Rejected registration submit"
            );
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let details = self.values.details();
        self.store.set_user(details.clone());

        debug!("Registered user");
        Ok(details)
    }

    fn revalidate(&mut self) -> &ErrorMap {
        self.errors = self.validator.validate(&self.values);
        debug!(invalid_fields = self.errors.len(), "Validated registration form");
        &self.errors
    }
}
