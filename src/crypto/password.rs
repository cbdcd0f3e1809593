//! Salted master-password hashing in PHC string format.
//!
//! Hashes look like `$argon2id$v=19$m=65536,t=3,p=4$<salt>$<hash>`, so
//! the parameters travel with the hash and verification always uses the
//! cost the hash was created with, even after the config changes.

use argon2::password_hash::{
    Error as PhcError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

use super::kdf::Argon2Params;
use super::random::random_array;
use crate::errors::{LedgerLockError, Result};

/// Raw salt length fed into the PHC salt encoder (128 bits).
const SALT_LEN: usize = 16;

/// Hash `password` with Argon2id and a fresh random salt.
pub fn hash_password(password: &[u8], params: &Argon2Params) -> Result<String> {
    let salt_bytes: [u8; SALT_LEN] = random_array()?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| LedgerLockError::PasswordHashFailed(format!("salt encoding: {e}")))?;

    let hash = params
        .hasher(None)?
        .hash_password(password, &salt)
        .map_err(|e| LedgerLockError::PasswordHashFailed(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check `password` against a stored PHC hash.
///
/// The digest comparison is the hash library's constant-time one.
/// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password(password: &[u8], stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| LedgerLockError::PasswordHashFailed(format!("bad stored hash: {e}")))?;

    match Argon2::default().verify_password(password, &parsed) {
        Ok(()) => Ok(true),
        Err(PhcError::Password) => Ok(false),
        Err(e) => Err(LedgerLockError::PasswordHashFailed(e.to_string())),
    }
}
