//! Registration form domain
//!
//! Form input types, the per-field rule predicates and the validator that
//! turns a [`FormInput`] into an [`ErrorMap`].

mod input;
pub mod rules;
mod validation;

pub use input::{FormField, FormInput};
pub use validation::{validate, ErrorMap, FieldError, FormValidator};
