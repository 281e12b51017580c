//! User infrastructure module
//!
//! In-memory implementation of the user store.

mod store;

pub use store::InMemoryUserStore;
