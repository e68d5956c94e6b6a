//! Chirp repository trait defining the interface for chirp persistence.

use async_trait::async_trait;

use crate::domain::entities::chirp::Chirp;
use crate::errors::DomainResult;

/// Persistence operations for [`Chirp`] entities.
///
/// Every mutating method must be atomic with respect to concurrent callers:
/// id assignment and the ownership check on delete happen inside the same
/// transaction as the write.
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Persist a new chirp. The body is expected to be validated and
    /// filtered already; the repository only assigns the id.
    async fn create_chirp(&self, body: String, author_id: u32) -> DomainResult<Chirp>;

    /// Delete a chirp owned by `requester_id`.
    ///
    /// Fails with `NotFound` if the chirp does not exist and `Forbidden` if
    /// it belongs to someone else. Nothing is written in either case.
    async fn delete_chirp(&self, id: u32, requester_id: u32) -> DomainResult<()>;

    /// Fetch a chirp by id, failing with `NotFound` if absent.
    async fn find_chirp(&self, id: u32) -> DomainResult<Chirp>;

    /// All chirps, in unspecified order.
    async fn list_chirps(&self) -> DomainResult<Vec<Chirp>>;
}
