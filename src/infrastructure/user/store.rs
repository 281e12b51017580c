//! In-memory user store implementation

use tracing::debug;

use crate::domain::user::{UserDetails, UserStore};

/// In-memory implementation of UserStore
///
/// Holds the last committed details for the life of the value.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    current: UserDetails,
}

impl InMemoryUserStore {
    /// Create a store with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `details`
    pub fn with_user(details: UserDetails) -> Self {
        Self { current: details }
    }
}

impl UserStore for InMemoryUserStore {
    fn set_user(&mut self, details: UserDetails) {
        debug!(
            username = ?details.username,
            phone_number = ?details.phone_number,
            "Replacing stored user"
        );
        self.current = details;
    }

    fn select_username(&self) -> Option<String> {
        self.current.username.clone()
    }

    fn select_phone_number(&self) -> Option<i64> {
        self.current.phone_number
    }

    fn select_password(&self) -> Option<String> {
        self.current.password.clone()
    }

    fn select_user(&self) -> UserDetails {
        self.current.clone()
    }
}
