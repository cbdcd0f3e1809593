//! Encrypted field blob layout.
//!
//! A blob is one base64 string (standard alphabet, padded):
//!
//! ```text
//! [salt: 64 bytes][iv: 16 bytes][auth tag: 16 bytes][ciphertext: rest]
//! ```
//!
//! - **Salt**: Argon2id salt the field key is derived from.
//! - **IV**: AES-256-GCM nonce, fresh for every encryption.
//! - **Auth tag**: GCM tag over the ciphertext.
//! - **Ciphertext**: same length as the UTF-8 plaintext.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::{IV_LEN, TAG_LEN};
use crate::errors::{LedgerLockError, Result};

/// Length of the per-blob key derivation salt.
pub const SALT_LEN: usize = 64;

/// Fixed-size prefix: salt + IV + tag.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN + TAG_LEN;

/// A decoded field blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBlob {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl FieldBlob {
    /// Serialize to the storage string.
    pub fn encode(&self) -> String {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.iv);
        buf.extend_from_slice(&self.tag);
        buf.extend_from_slice(&self.ciphertext);
        BASE64.encode(buf)
    }

    /// Parse a storage string.
    ///
    /// Bad base64 and anything shorter than the fixed header is an
    /// `IntegrityFailure`, same as a failed tag check.
    pub fn decode(encoded: &str) -> Result<Self> {
        let data = BASE64
            .decode(encoded.trim())
            .map_err(|_| LedgerLockError::IntegrityFailure)?;

        if data.len() < HEADER_LEN {
            return Err(LedgerLockError::IntegrityFailure);
        }

        let (salt, rest) = data.split_at(SALT_LEN);
        let (iv, rest) = rest.split_at(IV_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        Ok(Self {
            salt: salt.try_into().map_err(|_| LedgerLockError::IntegrityFailure)?,
            iv: iv.try_into().map_err(|_| LedgerLockError::IntegrityFailure)?,
            tag: tag.try_into().map_err(|_| LedgerLockError::IntegrityFailure)?,
            ciphertext: ciphertext.to_vec(),
        })
    }
}
