//! User entity and related types

use serde::{Deserialize, Serialize};

/// Details of an accepted user submission
///
/// This is both the payload handed to [`UserStore::set_user`](super::UserStore::set_user)
/// and the record the store holds between submissions. Every field starts unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub username: Option<String>,
    pub phone_number: Option<i64>,
    /// Plain text, as entered. Never serialized.
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl UserDetails {
    /// Create a fully populated set of details
    pub fn new(
        username: impl Into<String>,
        phone_number: i64,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            phone_number: Some(phone_number),
            password: Some(password.into()),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn phone_number(&self) -> Option<i64> {
        self.phone_number
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
