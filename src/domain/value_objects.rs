//! Value objects returned by domain operations.

use crate::domain::entities::user::User;

/// Result of a successful login: the authenticated user plus both tokens.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}
