//! Repository traits abstracting the persistent store.
//!
//! The file-backed implementations live in [`crate::storage::FileStore`];
//! the in-memory mocks here back unit tests of the services.

pub mod chirp_repository;
pub mod mock;
pub mod revocation_repository;
pub mod user_repository;

pub use chirp_repository::ChirpRepository;
pub use mock::{MockChirpRepository, MockRevocationRepository, MockUserRepository};
pub use revocation_repository::RevocationRepository;
pub use user_repository::UserRepository;
