//! Field-level protection for sensitive record values.
//!
//! - `FieldCipher`: password-keyed encrypt/decrypt of a single value (`cipher`)
//! - `FieldBlob`: the `salt ‖ iv ‖ tag ‖ ciphertext` storage layout (`blob`)
//! - Display-only masking (`mask`)

pub mod blob;
pub mod cipher;
pub mod mask;

pub use blob::FieldBlob;
pub use cipher::{FieldCipher, FieldKey};
pub use mask::{mask, DEFAULT_VISIBLE_SUFFIX, MASK_PLACEHOLDER};

pub use crate::crypto::MAX_TOKEN_LEN;

/// Default token length in random bytes.
pub const DEFAULT_TOKEN_LEN: usize = 32;

/// Generate a random hex identifier from `length` random bytes.
pub fn generate_token(length: usize) -> crate::errors::Result<String> {
    crate::crypto::generate_token(length)
}
