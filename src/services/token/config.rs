//! Configuration for the token service.

use serde::{Deserialize, Serialize};

const DEV_SECRET: &str = "development-secret-change-in-production";

/// Configuration for the token service. One process-wide secret signs both
/// token classes; the issuer claim is what keeps them apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// HMAC-SHA256 signing secret
    pub secret: String,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Whether the development fallback secret is still in use.
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEV_SECRET
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SECRET.to_string(),
        }
    }
}
