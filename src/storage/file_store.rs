//! File-backed store: the whole [`Document`] behind one reader/writer lock.
//!
//! `load` takes the lock shared, `write` takes it exclusive, and `update`
//! holds the exclusive lock across its entire read-compute-write cycle so a
//! domain operation is atomic with respect to every other caller. `load` and
//! `write` remain public for callers that only read or that deliberately
//! compose the two (which is not atomic; see the lost-update test).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::entities::chirp::Chirp;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, StoreError};
use crate::repositories::{ChirpRepository, RevocationRepository, UserRepository};

use super::document::Document;

/// Single-file JSON store, safe under concurrent in-process access.
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    /// Opens the store at `path`, writing an empty initialized [`Document`]
    /// if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            lock: RwLock::new(()),
        };
        store.ensure_initialized().await?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "initializing empty store file");
                self.write_locked(&Document::default()).await
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Reads and deserializes the whole document under a shared lock.
    pub async fn load(&self) -> Result<Document, StoreError> {
        let _guard = self.lock.read().await;
        self.read_locked().await
    }

    /// Serializes and replaces the whole document under an exclusive lock.
    pub async fn write(&self, doc: &Document) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;
        self.write_locked(doc).await
    }

    /// Atomic read-compute-write transaction.
    ///
    /// The exclusive lock is held for the full extent, so two concurrent
    /// `update` calls cannot read the same state or clobber each other's
    /// writes. If the closure returns an error nothing is written.
    pub async fn update<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Document) -> DomainResult<T>,
    {
        let _guard = self.lock.write().await;
        let mut doc = self.read_locked().await.map_err(DomainError::Store)?;
        let out = f(&mut doc)?;
        self.write_locked(&doc).await.map_err(DomainError::Store)?;
        Ok(out)
    }

    async fn read_locked(&self) -> Result<Document, StoreError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotInitialized {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&data)?)
    }

    async fn write_locked(&self, doc: &Document) -> Result<(), StoreError> {
        let data = serde_json::to_vec(doc)?;
        fs::write(&self.path, data).await?;
        // Owner read/write only; the file holds password hashes and the
        // revocation set.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ChirpRepository for FileStore {
    async fn create_chirp(&self, body: String, author_id: u32) -> DomainResult<Chirp> {
        self.update(|doc| {
            let id = doc.next_chirp_id();
            let chirp = Chirp::new(id, body, author_id);
            doc.chirps.insert(id, chirp.clone());
            Ok(chirp)
        })
        .await
    }

    async fn delete_chirp(&self, id: u32, requester_id: u32) -> DomainResult<()> {
        self.update(|doc| {
            let chirp = doc
                .chirps
                .get(&id)
                .ok_or(DomainError::NotFound { resource: "chirp" })?;
            if chirp.author_id != requester_id {
                return Err(DomainError::Forbidden);
            }
            doc.chirps.remove(&id);
            Ok(())
        })
        .await
    }

    async fn find_chirp(&self, id: u32) -> DomainResult<Chirp> {
        let doc = self.load().await.map_err(DomainError::Store)?;
        doc.chirps
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound { resource: "chirp" })
    }

    async fn list_chirps(&self) -> DomainResult<Vec<Chirp>> {
        let doc = self.load().await.map_err(DomainError::Store)?;
        Ok(doc.chirps.into_values().collect())
    }
}

#[async_trait]
impl UserRepository for FileStore {
    async fn create_user(&self, email: String, password_hash: String) -> DomainResult<User> {
        self.update(|doc| {
            let id = doc.next_user_id();
            let user = User::new(id, email, password_hash);
            doc.users.insert(id, user.clone());
            Ok(user)
        })
        .await
    }

    async fn update_user(
        &self,
        id: u32,
        email: String,
        password_hash: String,
    ) -> DomainResult<User> {
        self.update(|doc| {
            let user = doc
                .users
                .get_mut(&id)
                .ok_or(DomainError::NotFound { resource: "user" })?;
            user.email = email;
            user.password_hash = password_hash;
            Ok(user.clone())
        })
        .await
    }

    async fn find_user(&self, id: u32) -> DomainResult<User> {
        let doc = self.load().await.map_err(DomainError::Store)?;
        doc.users
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound { resource: "user" })
    }

    async fn find_user_by_email(&self, email: &str) -> DomainResult<User> {
        let doc = self.load().await.map_err(DomainError::Store)?;
        doc.users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(DomainError::NotFound { resource: "user" })
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let doc = self.load().await.map_err(DomainError::Store)?;
        Ok(doc.users.into_values().collect())
    }

    async fn promote_user(&self, id: u32) -> DomainResult<()> {
        self.update(|doc| {
            let user = doc
                .users
                .get_mut(&id)
                .ok_or(DomainError::NotFound { resource: "user" })?;
            user.promote();
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl RevocationRepository for FileStore {
    async fn revoke(&self, raw_token: &str) -> DomainResult<()> {
        self.update(|doc| {
            doc.revoked_tokens.insert(raw_token.to_string(), true);
            Ok(())
        })
        .await
    }

    async fn is_revoked(&self, raw_token: &str) -> DomainResult<bool> {
        let doc = self.load().await.map_err(DomainError::Store)?;
        Ok(doc.revoked_tokens.contains_key(raw_token))
    }
}
