//! Business entities owned by the persistent store.

pub mod chirp;
pub mod token;
pub mod user;

pub use chirp::{Chirp, SortOrder, MAX_BODY_CHARS};
pub use token::{
    AccessClaims, Claims, RefreshClaims, TokenKind, ACCESS_ISSUER, ACCESS_TOKEN_EXPIRY_HOURS,
    REFRESH_ISSUER, REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::User;
