pub mod registration;
pub mod user;

pub use registration::{validate, ErrorMap, FieldError, FormField, FormInput, FormValidator};
pub use user::{UserDetails, UserStore};
