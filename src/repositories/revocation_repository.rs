//! Revocation registry trait: the durable set of refresh tokens that must
//! no longer be honored.
//!
//! Membership is by exact raw-token string, not by subject or issue time, so
//! revoking one refresh token leaves any other live refresh tokens for the
//! same user untouched. Entries are retained forever; there is no expiry
//! bookkeeping (a known scaling constraint of the single-file design).

use async_trait::async_trait;

use crate::errors::DomainResult;

#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Add a raw token string to the revoked set. Idempotent.
    async fn revoke(&self, raw_token: &str) -> DomainResult<()>;

    /// Whether the raw token string has been revoked.
    async fn is_revoked(&self, raw_token: &str) -> DomainResult<bool>;
}
