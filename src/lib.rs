//! User Registration Form
//!
//! The presentation-independent core of a user registration form:
//! - Per-field validation of username, phone number, password and confirmation
//! - An in-memory user store holding the last accepted submission
//! - A form controller that re-validates on every edit and commits on a clean submit

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{
    validate, ErrorMap, FieldError, FormField, FormInput, FormValidator, UserDetails, UserStore,
};
pub use infrastructure::registration::{RegistrationForm, SubmitError};
pub use infrastructure::user::InMemoryUserStore;
