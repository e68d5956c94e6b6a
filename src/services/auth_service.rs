//! Authentication flows: login, access-token refresh, session revocation.

use std::sync::Arc;

use crate::domain::value_objects::AuthSession;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{RevocationRepository, UserRepository};
use crate::services::password;
use crate::services::token::TokenService;

/// Authentication service composing the user repository, the token service,
/// and (through it) the revocation registry.
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: RevocationRepository,
{
    users: Arc<U>,
    tokens: Arc<TokenService<R>>,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: RevocationRepository,
{
    pub fn new(users: Arc<U>, tokens: Arc<TokenService<R>>) -> Self {
        Self { users, tokens }
    }

    /// Verifies credentials and issues both token classes.
    ///
    /// Unknown email and wrong password both collapse to
    /// `InvalidCredentials` so callers cannot probe which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let user = self
            .users
            .find_user_by_email(email)
            .await
            .map_err(|e| match e {
                DomainError::NotFound { .. } => DomainError::InvalidCredentials,
                other => other,
            })?;

        if !password::verify_password(&user.password_hash, password)? {
            tracing::debug!(user_id = user.id, "login rejected: password mismatch");
            return Err(DomainError::InvalidCredentials);
        }

        let access_token = self.tokens.issue_access(user.id, &user.email)?;
        let refresh_token = self.tokens.issue_refresh(user.id)?;
        Ok(AuthSession {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Exchanges a live refresh token for a fresh access token.
    ///
    /// The refresh token is validated as refresh-class, checked against the
    /// revocation registry, and left in place: there is no rotation.
    pub async fn refresh(&self, raw_refresh_token: &str) -> DomainResult<String> {
        let claims = self.tokens.verify_refresh(raw_refresh_token).await?;
        let user = self.users.find_user(claims.user_id).await?;
        self.tokens.issue_access(user.id, &user.email)
    }

    /// Permanently revokes a refresh token.
    pub async fn revoke_session(&self, raw_refresh_token: &str) -> DomainResult<()> {
        self.tokens.revoke(raw_refresh_token).await
    }
}
