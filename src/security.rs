//! Password hashing with Argon2id. The hash and verify cores are CPU-bound,
//! so the async entry points run them on the blocking pool and the request
//! task suspends until the worker finishes.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppError;

/// Hash a plaintext password with a fresh random salt. Same input produces a
/// different storable string each call; any output verifies its own input.
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| AppError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AppError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

/// Non-blocking wrapper: offloads to the blocking pool.
pub async fn hash_password_async(plaintext: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&plaintext)).await?
}

pub async fn verify_password_async(plaintext: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&plaintext, &hash)).await?
}
