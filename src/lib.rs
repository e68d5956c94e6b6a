//! # Chirp Core
//!
//! Core business logic for the chirps posting backend: domain entities,
//! authentication services, repository interfaces, and the single-file JSON
//! store that backs them. Transport concerns (routing, request parsing,
//! status-code mapping) live in the calling layer.

pub mod config;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
pub use storage::{Document, FileStore};
