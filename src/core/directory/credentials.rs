// src/core/directory/credentials.rs

//! Salted-hash credential storage and verification using Argon2.

use crate::core::PatrimoineError;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

/// Hashes a plaintext password with a fresh random salt.
/// The plaintext is trimmed first, matching the username normalization.
pub fn hash_password(plain: &str) -> Result<String, PatrimoineError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.trim().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PatrimoineError::Internal(format!("Failed to hash password: {e}")))
}

/// Verifies a plaintext password against a stored Argon2 hash.
/// An unparseable stored hash verifies as false rather than erroring, so a
/// corrupted record cannot be logged into.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.trim().as_bytes(), &parsed_hash)
        .is_ok()
}
