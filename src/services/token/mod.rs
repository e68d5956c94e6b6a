//! JWT token issuance, validation, and revocation.

pub mod config;
pub mod service;

pub use config::TokenConfig;
pub use service::TokenService;
