//! Mock authentication.
//!
//! There is no real credential check: the fixed test pair maps to a canonical
//! test user, and any other non-empty email/password pair yields a demo user.

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const TEST_EMAIL: &str = "aegpt@test.com";
pub const TEST_PASSWORD: &str = "AEtest@123";

const DEMO_VALID_UNTIL: &str = "2099-01-01";

/// The persisted session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub subscription_status: bool,
    pub valid_until: String,
}

/// Resolve credentials to a user profile, or `None` when either field is
/// empty.
pub fn authenticate(email: &str, password: &str) -> Option<UserProfile> {
    let email = email.trim();

    if email == TEST_EMAIL && password == TEST_PASSWORD {
        return Some(UserProfile {
            user_id: "test-user-001".to_string(),
            email: email.to_string(),
            name: "Test User".to_string(),
            subscription_status: true,
            valid_until: DEMO_VALID_UNTIL.to_string(),
        });
    }

    if email.is_empty() || password.is_empty() {
        return None;
    }

    let name = email.split('@').next().unwrap_or(email).to_string();
    Some(UserProfile {
        user_id: format!("user-{}", Utc::now().timestamp_millis()),
        email: email.to_string(),
        name,
        subscription_status: true,
        valid_until: DEMO_VALID_UNTIL.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_map_to_canonical_user() {
        let user = authenticate(TEST_EMAIL, TEST_PASSWORD).unwrap();
        assert_eq!(user.user_id, "test-user-001");
        assert_eq!(user.name, "Test User");
        assert!(user.subscription_status);
    }

    #[test]
    fn any_non_empty_pair_yields_demo_user() {
        let user = authenticate("sam@uni.edu", "hunter2").unwrap();
        assert_eq!(user.name, "sam");
        assert_eq!(user.email, "sam@uni.edu");
        assert!(user.user_id.starts_with("user-"));
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(authenticate("", "pw").is_none());
        assert!(authenticate("a@b.c", "").is_none());
        assert!(authenticate("   ", "pw").is_none());
    }
}
