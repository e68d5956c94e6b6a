//! Domain-specific error types and error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Input validation failures. Always recoverable; nothing is persisted when
/// one of these is returned.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("body too long: {actual} chars (max {max})")]
    TooLong { max: usize, actual: usize },

    #[error("required field: {field}")]
    RequiredField { field: &'static str },
}

/// Token validation and lifecycle failures.
///
/// The transport layer reports these generically to avoid oracle leaks; the
/// distinct variants exist for logging and tests.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token signature invalid")]
    Unsigned,

    #[error("token expired")]
    Expired,

    #[error("wrong issuer: expected {expected}, got {actual}")]
    WrongIssuer { expected: String, actual: String },

    #[error("token revoked")]
    Revoked,

    #[error("missing claim: {claim}")]
    MissingClaim { claim: &'static str },

    #[error("token signing failed")]
    SigningFailed,
}

/// Password hashing failures. Unexpected; propagated, never retried.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("stored password hash is malformed")]
    MalformedHash,

    #[error("password hashing failed: {0}")]
    Internal(String),
}

/// Persistent store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store file missing at {path}: initialization was never run")]
    NotInitialized { path: PathBuf },

    #[error("store I/O failed")]
    Io(#[from] std::io::Error),

    #[error("store (de)serialization failed")]
    Serialization(#[from] serde_json::Error),
}

/// Unified error type returned by every domain operation.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Requester is authenticated but does not own the resource.
    #[error("forbidden")]
    Forbidden,

    /// Unknown email or wrong password. Deliberately a single variant so
    /// callers cannot distinguish the two cases.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_messages() {
        let err = ValidationError::TooLong { max: 140, actual: 141 };
        assert_eq!(err.to_string(), "body too long: 141 chars (max 140)");

        let err = ValidationError::RequiredField { field: "email" };
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn token_errors_bridge_into_domain_error() {
        let err: DomainError = TokenError::Expired.into();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }

    #[test]
    fn invalid_credentials_message_names_no_cause() {
        let msg = DomainError::InvalidCredentials.to_string();
        assert!(!msg.contains("not found"));
        assert!(!msg.contains("hash"));
    }
}
