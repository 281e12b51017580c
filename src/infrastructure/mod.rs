//! Infrastructure layer - Store implementations, form controller and logging

pub mod logging;
pub mod registration;
pub mod user;
