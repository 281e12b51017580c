//! User domain
//!
//! This module provides the committed user details and the store trait the
//! registration form writes into.

mod entity;
mod store;

pub use entity::UserDetails;
pub use store::UserStore;

#[cfg(test)]
pub use store::MockUserStore;
