//! Claims entities for the two token classes.
//!
//! The issuer string embedded in a token is the sole mechanism separating
//! access tokens from refresh tokens, so claims are modelled as a tagged sum
//! over the two classes: decoding yields the specific variant and there is no
//! way to read an access-only field off a refresh token.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 1;

/// Refresh token lifetime (60 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 60;

/// Issuer tag carried by access tokens
pub const ACCESS_ISSUER: &str = "access-realm";

/// Issuer tag carried by refresh tokens
pub const REFRESH_ISSUER: &str = "refresh-realm";

/// The token class a caller expects to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// The issuer tag a token of this class must carry.
    pub fn issuer(&self) -> &'static str {
        match self {
            TokenKind::Access => ACCESS_ISSUER,
            TokenKind::Refresh => REFRESH_ISSUER,
        }
    }
}

/// Decoded claims of a short-lived access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    pub user_id: u32,
    pub email: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl AccessClaims {
    /// Builds claims expiring [`ACCESS_TOKEN_EXPIRY_HOURS`] from now.
    pub fn new(user_id: u32, email: String) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS);
        Self {
            user_id,
            email,
            issued_at: now.timestamp(),
            expires_at: expiry.timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

/// Decoded claims of a long-lived refresh token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshClaims {
    pub user_id: u32,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl RefreshClaims {
    /// Builds claims expiring [`REFRESH_TOKEN_EXPIRY_DAYS`] from now.
    pub fn new(user_id: u32) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS);
        Self {
            user_id,
            issued_at: now.timestamp(),
            expires_at: expiry.timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

/// Decoded claims of either token class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
}

impl Claims {
    /// The user the token was issued to, regardless of class.
    pub fn user_id(&self) -> u32 {
        match self {
            Claims::Access(c) => c.user_id,
            Claims::Refresh(c) => c.user_id,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Claims::Access(_) => TokenKind::Access,
            Claims::Refresh(_) => TokenKind::Refresh,
        }
    }
}

/// Wire shape shared by both classes. `iss` does the class tagging; `email`
/// is only present on access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawClaims {
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&AccessClaims> for RawClaims {
    fn from(claims: &AccessClaims) -> Self {
        Self {
            iss: ACCESS_ISSUER.to_string(),
            sub: claims.user_id.to_string(),
            iat: claims.issued_at,
            exp: claims.expires_at,
            email: Some(claims.email.clone()),
        }
    }
}

impl From<&RefreshClaims> for RawClaims {
    fn from(claims: &RefreshClaims) -> Self {
        Self {
            iss: REFRESH_ISSUER.to_string(),
            sub: claims.user_id.to_string(),
            iat: claims.issued_at,
            exp: claims.expires_at,
            email: None,
        }
    }
}
