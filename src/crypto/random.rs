//! OS-sourced randomness for salts, IVs and tokens.
//!
//! Every byte comes straight from the operating system RNG.  A failing
//! RNG is reported as an error instead of falling back to anything
//! weaker.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{LedgerLockError, Result};

/// Fill `buf` with cryptographically secure random bytes.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| LedgerLockError::RandomFailed(e.to_string()))
}

/// Return a fixed-size array of random bytes.
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    fill_random(&mut out)?;
    Ok(out)
}

/// Largest token, in random bytes, that `generate_token` will produce.
pub const MAX_TOKEN_LEN: usize = 1024;

/// Generate a random hex token from `length` random bytes.
///
/// The result is `2 * length` lowercase hex characters.  Lengths above
/// `MAX_TOKEN_LEN` are rejected before anything is allocated.
pub fn generate_token(length: usize) -> Result<String> {
    if length > MAX_TOKEN_LEN {
        return Err(LedgerLockError::RandomFailed(format!(
            "token length {length} exceeds the maximum of {MAX_TOKEN_LEN} bytes"
        )));
    }
    let mut bytes = vec![0u8; length];
    fill_random(&mut bytes)?;
    Ok(hex::encode(bytes))
}
