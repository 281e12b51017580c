//! Registration infrastructure module

mod form;

pub use form::{RegistrationForm, SubmitError};
