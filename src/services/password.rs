//! Password hashing and verification with bcrypt.
//!
//! Bcrypt produces a self-salted hash whose cost factor is tunable; the
//! comparison in [`verify_password`] is constant-time.

use crate::errors::HashError;

pub use bcrypt::DEFAULT_COST;

/// Hashes a password at the given cost factor.
pub fn hash_password(password: &str, cost: u32) -> Result<String, HashError> {
    bcrypt::hash(password, cost).map_err(|e| HashError::Internal(e.to_string()))
}

/// Verifies a candidate password against a stored hash.
///
/// Returns `Ok(false)` on mismatch; errors only when the stored hash itself
/// is malformed.
pub fn verify_password(stored_hash: &str, candidate: &str) -> Result<bool, HashError> {
    bcrypt::verify(candidate, stored_hash).map_err(|_| HashError::MalformedHash)
}
