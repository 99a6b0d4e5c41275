//! Password Hashing
//! Mission: Wrap bcrypt hashing and verification behind a fixed cost factor

use anyhow::{Context, Result};
use bcrypt::{hash, verify};

/// Fixed bcrypt cost factor (2^10 rounds).
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with a random per-record salt.
pub fn hash_password(plaintext: &str) -> Result<String> {
    hash(plaintext, BCRYPT_COST).context("Failed to hash password")
}

/// Verify a plaintext password against a stored bcrypt digest.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool> {
    verify(plaintext, digest).context("Failed to verify password")
}
