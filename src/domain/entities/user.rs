//! User entity representing a registered account.

use serde::{Deserialize, Serialize};

/// A registered user. Users are created and updated through domain
/// operations and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, starting at 1
    pub id: u32,

    /// Login email; also the secondary lookup key
    pub email: String,

    /// Bcrypt hash of the user's password
    pub password_hash: String,

    /// Whether the account has been promoted via the external webhook
    #[serde(default)]
    pub is_promoted: bool,
}

impl User {
    /// Creates a new unpromoted user.
    pub fn new(id: u32, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
            is_promoted: false,
        }
    }

    /// Marks the account as promoted.
    pub fn promote(&mut self) {
        self.is_promoted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_is_not_promoted() {
        let user = User::new(1, "a@b.com".to_string(), "hash".to_string());
        assert!(!user.is_promoted);
    }

    #[test]
    fn promote_sets_flag() {
        let mut user = User::new(1, "a@b.com".to_string(), "hash".to_string());
        user.promote();
        assert!(user.is_promoted);
    }

    #[test]
    fn missing_promoted_field_defaults_to_false() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"email":"a@b.com","password_hash":"h"}"#).unwrap();
        assert!(!user.is_promoted);
    }
}
