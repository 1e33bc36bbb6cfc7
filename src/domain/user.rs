//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Trim and lowercase an email address.
///
/// Every store write and every lookup goes through this, which is what makes
/// email matching case-insensitive without any special collation support.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Opaque image reference (data URL or path); None = no avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id. The email is normalized.
    pub fn new(name: String, email: &str, password: String, avatar: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            name: name.trim().to_string(),
            password,
            avatar,
            created_at: Utc::now(),
        }
    }
}

/// Registration data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    /// User email address (unique, case-insensitive)
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// User display name
    pub name: String,
    /// Optional avatar image reference
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn new_user_normalizes_email() {
        let user = User::new("Ane".into(), "Ane@Gmail.COM", "2222".into(), None);
        assert_eq!(user.email, "ane@gmail.com");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn password_never_serializes() {
        let user = User::new("Ane".into(), "ane@gmail.com", "2222".into(), None);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ane@gmail.com");
    }
}
