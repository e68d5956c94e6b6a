//! Process-wide configuration.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::services::password;
use crate::services::token::TokenConfig;

/// Configuration for the core: the store file location, the token signing
/// secret, and the password hashing cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the JSON store file
    pub database_path: PathBuf,

    /// Token service configuration
    pub token: TokenConfig,

    /// Bcrypt cost factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("database.json"),
            token: TokenConfig::default(),
            bcrypt_cost: password::DEFAULT_COST,
        }
    }
}

impl AppConfig {
    /// Builds a configuration from the environment, falling back to the
    /// defaults for anything unset.
    ///
    /// Recognized variables: `DATABASE_PATH`, `JWT_SECRET`, `BCRYPT_COST`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var("DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Ok(secret) = env::var("JWT_SECRET") {
            config.token = TokenConfig::new(secret);
        }
        if let Ok(cost) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost.parse() {
                config.bcrypt_cost = cost;
            }
        }
        if config.token.is_using_default_secret() {
            tracing::warn!("JWT_SECRET not set; using the development signing secret");
        }
        config
    }
}
