//! Password-keyed encryption of individual sensitive field values.
//!
//! Every `encrypt` draws a fresh salt and IV, derives a one-off key from
//! the password and that salt, and packs everything into a `FieldBlob`.
//! `decrypt` re-derives the key from the embedded salt.  No derived key
//! outlives the call that made it.

use zeroize::{Zeroize, Zeroizing};

use super::blob::{FieldBlob, SALT_LEN};
use crate::crypto::{self, Argon2Params, IV_LEN, KEY_LEN};
use crate::errors::{LedgerLockError, Result};

/// A 32-byte field key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct FieldKey {
    bytes: [u8; KEY_LEN],
}

impl FieldKey {
    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Symmetric cipher for sensitive field values.
///
/// Holds only the Argon2id cost parameters; these must match the ones
/// the blobs were written with, which is why the document pins them.
#[derive(Debug, Clone, Copy)]
pub struct FieldCipher {
    params: Argon2Params,
}

impl FieldCipher {
    pub fn new(params: Argon2Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Argon2Params {
        &self.params
    }

    /// Derive the field key for `password` and `salt`.
    pub fn derive_key(&self, password: &str, salt: &[u8; SALT_LEN]) -> Result<FieldKey> {
        let mut bytes = crypto::derive_key_with_params(password.as_bytes(), salt, &self.params)?;
        let key = FieldKey { bytes };
        bytes.zeroize();
        Ok(key)
    }

    /// Encrypt `plaintext` into a base64 field blob.
    pub fn encrypt(&self, plaintext: &str, password: &str) -> Result<String> {
        let salt: [u8; SALT_LEN] = crypto::random_array()?;
        let iv: [u8; IV_LEN] = crypto::random_array()?;

        let key = self.derive_key(password, &salt)?;
        let (tag, ciphertext) = crypto::seal(key.as_bytes(), &iv, plaintext.as_bytes())?;

        Ok(FieldBlob {
            salt,
            iv,
            tag,
            ciphertext,
        }
        .encode())
    }

    /// Decrypt a blob produced by `encrypt` with the same password.
    pub fn decrypt(&self, blob: &str, password: &str) -> Result<String> {
        let blob = FieldBlob::decode(blob)?;

        let key = self.derive_key(password, &blob.salt)?;
        let plaintext = crypto::open(key.as_bytes(), &blob.iv, &blob.tag, &blob.ciphertext)?;

        String::from_utf8(plaintext).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            LedgerLockError::IntegrityFailure
        })
    }

    /// Decrypt into a buffer that is wiped on drop.
    pub fn decrypt_zeroizing(&self, blob: &str, password: &str) -> Result<Zeroizing<String>> {
        self.decrypt(blob, password).map(Zeroizing::new)
    }
}
