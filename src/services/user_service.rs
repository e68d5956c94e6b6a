//! User domain operations: account creation, update, promotion.

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password;

/// Domain operations over user accounts.
pub struct UserService<U: UserRepository> {
    users: Arc<U>,
    bcrypt_cost: u32,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self::with_cost(users, password::DEFAULT_COST)
    }

    /// Overrides the bcrypt cost factor. Tests use the minimum cost.
    pub fn with_cost(users: Arc<U>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// Registers a new account. Email and password are both required; the
    /// password is hashed before anything is persisted.
    pub async fn create(&self, email: &str, password: &str) -> DomainResult<User> {
        validate_credentials(email, password)?;
        let hash = password::hash_password(password, self.bcrypt_cost)?;
        self.users.create_user(email.to_string(), hash).await
    }

    /// Replaces the email and password of an existing account. The caller
    /// is authenticated upstream via an access token.
    pub async fn update(&self, user_id: u32, email: &str, password: &str) -> DomainResult<User> {
        validate_credentials(email, password)?;
        let hash = password::hash_password(password, self.bcrypt_cost)?;
        self.users.update_user(user_id, email.to_string(), hash).await
    }

    /// Fetches one user by id.
    pub async fn get(&self, user_id: u32) -> DomainResult<User> {
        self.users.find_user(user_id).await
    }

    /// Lists all users, in unspecified order.
    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.users.list_users().await
    }

    /// Marks an account as promoted. Triggered by the external payment
    /// webhook collaborator, never by the user themselves.
    pub async fn promote(&self, user_id: u32) -> DomainResult<()> {
        self.users.promote_user(user_id).await
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::RequiredField { field: "email" });
    }
    if password.is_empty() {
        return Err(ValidationError::RequiredField { field: "password" });
    }
    Ok(())
}
