//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Persistence operations for [`User`] entities. Users are never deleted.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user with an already-hashed password.
    async fn create_user(&self, email: String, password_hash: String) -> DomainResult<User>;

    /// Replace the email and password hash of an existing user.
    ///
    /// Fails with `NotFound` if the user does not exist.
    async fn update_user(
        &self,
        id: u32,
        email: String,
        password_hash: String,
    ) -> DomainResult<User>;

    /// Fetch a user by id, failing with `NotFound` if absent.
    async fn find_user(&self, id: u32) -> DomainResult<User>;

    /// Look up a user by email. This is a linear scan over the collection;
    /// fails with `NotFound` if no user carries the email.
    async fn find_user_by_email(&self, email: &str) -> DomainResult<User>;

    /// All users, in unspecified order.
    async fn list_users(&self) -> DomainResult<Vec<User>>;

    /// Set the promoted flag on a user. Fails with `NotFound` if absent.
    async fn promote_user(&self, id: u32) -> DomainResult<()>;
}
