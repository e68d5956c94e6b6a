//! In-memory mock repositories for testing services without a store file.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::chirp::Chirp;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

use super::chirp_repository::ChirpRepository;
use super::revocation_repository::RevocationRepository;
use super::user_repository::UserRepository;

/// Mock chirp repository backed by an in-memory map.
///
/// Reproduces the store's `size + 1` id assignment so service tests observe
/// the same ids the file store would hand out.
#[derive(Default)]
pub struct MockChirpRepository {
    chirps: Arc<RwLock<BTreeMap<u32, Chirp>>>,
}

impl MockChirpRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChirpRepository for MockChirpRepository {
    async fn create_chirp(&self, body: String, author_id: u32) -> DomainResult<Chirp> {
        let mut chirps = self.chirps.write().await;
        let id = chirps.len() as u32 + 1;
        let chirp = Chirp::new(id, body, author_id);
        chirps.insert(id, chirp.clone());
        Ok(chirp)
    }

    async fn delete_chirp(&self, id: u32, requester_id: u32) -> DomainResult<()> {
        let mut chirps = self.chirps.write().await;
        let chirp = chirps
            .get(&id)
            .ok_or(DomainError::NotFound { resource: "chirp" })?;
        if chirp.author_id != requester_id {
            return Err(DomainError::Forbidden);
        }
        chirps.remove(&id);
        Ok(())
    }

    async fn find_chirp(&self, id: u32) -> DomainResult<Chirp> {
        let chirps = self.chirps.read().await;
        chirps
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound { resource: "chirp" })
    }

    async fn list_chirps(&self) -> DomainResult<Vec<Chirp>> {
        let chirps = self.chirps.read().await;
        Ok(chirps.values().cloned().collect())
    }
}

/// Mock user repository backed by an in-memory map.
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<BTreeMap<u32, User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create_user(&self, email: String, password_hash: String) -> DomainResult<User> {
        let mut users = self.users.write().await;
        let id = users.len() as u32 + 1;
        let user = User::new(id, email, password_hash);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        id: u32,
        email: String,
        password_hash: String,
    ) -> DomainResult<User> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or(DomainError::NotFound { resource: "user" })?;
        user.email = email;
        user.password_hash = password_hash;
        Ok(user.clone())
    }

    async fn find_user(&self, id: u32) -> DomainResult<User> {
        let users = self.users.read().await;
        users
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound { resource: "user" })
    }

    async fn find_user_by_email(&self, email: &str) -> DomainResult<User> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(DomainError::NotFound { resource: "user" })
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn promote_user(&self, id: u32) -> DomainResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or(DomainError::NotFound { resource: "user" })?;
        user.promote();
        Ok(())
    }
}

/// Mock revocation registry backed by an in-memory set.
#[derive(Default)]
pub struct MockRevocationRepository {
    revoked: Arc<RwLock<BTreeSet<String>>>,
}

impl MockRevocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationRepository {
    async fn revoke(&self, raw_token: &str) -> DomainResult<()> {
        let mut revoked = self.revoked.write().await;
        revoked.insert(raw_token.to_string());
        Ok(())
    }

    async fn is_revoked(&self, raw_token: &str) -> DomainResult<bool> {
        let revoked = self.revoked.read().await;
        Ok(revoked.contains(raw_token))
    }
}
