//! User store trait

use super::entity::UserDetails;

/// Holder of the last accepted user submission
///
/// The store performs no validation and cannot fail: callers gate
/// [`set_user`](UserStore::set_user) on an empty validation result.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore {
    /// Replace all three stored fields with `details`
    fn set_user(&mut self, details: UserDetails);

    /// Currently stored username
    fn select_username(&self) -> Option<String>;

    /// Currently stored phone number
    fn select_phone_number(&self) -> Option<i64>;

    /// Currently stored password
    fn select_password(&self) -> Option<String>;

    /// Snapshot of all stored fields
    fn select_user(&self) -> UserDetails {
        UserDetails {
            username: self.select_username(),
            phone_number: self.select_phone_number(),
            password: self.select_password(),
        }
    }
}
