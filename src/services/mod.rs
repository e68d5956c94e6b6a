//! Business services containing domain logic and use cases.

pub mod auth_service;
pub mod chirp_service;
pub mod password;
pub mod token;
pub mod user_service;

// Re-export commonly used types
pub use auth_service::AuthService;
pub use chirp_service::ChirpService;
pub use token::{TokenConfig, TokenService};
pub use user_service::UserService;
