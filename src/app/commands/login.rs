//! Mock-auth session commands.

use crate::domain::{AppError, UserProfile, authenticate};
use crate::ports::SessionStore;

/// Log in and persist the session.
pub fn login<S: SessionStore>(
    session: &S,
    email: &str,
    password: &str,
) -> Result<UserProfile, AppError> {
    let user = authenticate(email, password).ok_or(AppError::LoginFailed)?;
    session.store_user(&user)?;
    Ok(user)
}

/// Remove the session record, if any.
pub fn logout<S: SessionStore>(session: &S) -> Result<(), AppError> {
    session.clear_user()
}

/// The logged-in user, or `NotLoggedIn`.
pub fn current_user<S: SessionStore>(session: &S) -> Result<UserProfile, AppError> {
    session.current_user()?.ok_or(AppError::NotLoggedIn)
}
