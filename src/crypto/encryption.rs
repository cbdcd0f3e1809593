//! AES-256-GCM authenticated encryption with a 16-byte IV.
//!
//! Field blobs store the salt, IV, tag and ciphertext as separate
//! segments, so this layer works in detached mode: `seal` hands back the
//! tag next to the ciphertext and `open` takes it back the same way.
//! The caller owns IV generation and must never reuse an IV under a key.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;

use crate::errors::{LedgerLockError, Result};

/// Size of the IV in bytes.
pub const IV_LEN: usize = 16;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// AES-256-GCM instantiated with a 128-bit nonce.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Encrypt `plaintext` under a 32-byte `key` and `iv`.
///
/// Returns `(tag, ciphertext)`; the ciphertext has the plaintext's length.
pub fn seal(key: &[u8], iv: &[u8; IV_LEN], plaintext: &[u8]) -> Result<([u8; TAG_LEN], Vec<u8>)> {
    let cipher = Aes256Gcm16::new_from_slice(key)
        .map_err(|e| LedgerLockError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(iv), b"", &mut buffer)
        .map_err(|e| LedgerLockError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);
    Ok((tag_bytes, buffer))
}

/// Decrypt and authenticate data produced by `seal`.
///
/// Any mismatch (key, IV, tag or ciphertext) is an `IntegrityFailure`
/// and no plaintext is returned.
pub fn open(
    key: &[u8],
    iv: &[u8; IV_LEN],
    tag: &[u8; TAG_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm16::new_from_slice(key).map_err(|_| LedgerLockError::IntegrityFailure)?;

    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(iv),
            b"",
            &mut buffer,
            GenericArray::from_slice(tag),
        )
        .map_err(|_| LedgerLockError::IntegrityFailure)?;

    Ok(buffer)
}
