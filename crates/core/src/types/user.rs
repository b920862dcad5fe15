//! User and session identity types.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::email::Email;
use crate::types::phone::Phone;

/// Unique user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated shopper.
///
/// An absent `User` in the application state means a guest session. The
/// serialized form is what the `user` storage key carries; the key is
/// removed entirely while logged out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Contact phone number.
    pub phone: Phone,
    /// Avatar image reference, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Whether this user is currently logged in.
    pub is_logged_in: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::generate(),
            name: "Asha Shrestha".to_owned(),
            email: Email::parse("asha@example.com").unwrap(),
            phone: Phone::parse("+977 9841234567").unwrap(),
            avatar: None,
            is_logged_in: true,
        }
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn test_wire_format() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isLoggedIn"], serde_json::json!(true));
        assert!(json.get("avatar").is_none());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_rejects_invalid_contact_on_deserialize() {
        // a stored user with a mangled email must fail to parse, so
        // hydration falls back to a guest session
        let json = r#"{
            "id": "6e0a1a6e-44a8-4d0a-8f2e-1f6a0c4d9b11",
            "name": "Asha",
            "email": "not-an-email",
            "phone": "+9779841234567",
            "isLoggedIn": true
        }"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
