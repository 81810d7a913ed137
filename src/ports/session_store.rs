//! Session storage port definition.

use crate::domain::{AppError, UserProfile};

/// Port for the persisted mock-auth session.
pub trait SessionStore {
    /// The logged-in user, if a session exists.
    fn current_user(&self) -> Result<Option<UserProfile>, AppError>;

    /// Persist the session record.
    fn store_user(&self, user: &UserProfile) -> Result<(), AppError>;

    /// Remove the session record.
    fn clear_user(&self) -> Result<(), AppError>;
}
