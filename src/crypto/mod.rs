//! Cryptographic primitives for LedgerLock.
//!
//! This module provides:
//! - AES-256-GCM encryption with a 16-byte IV, detached tag (`encryption`)
//! - Argon2id key derivation (`kdf`)
//! - Argon2id master-password hashing in PHC format (`password`)
//! - OS-sourced random bytes and tokens (`random`)

pub mod encryption;
pub mod kdf;
pub mod password;
pub mod random;

pub use encryption::{open, seal, IV_LEN, TAG_LEN};
pub use kdf::{derive_key_with_params, Argon2Params, KEY_LEN};
pub use password::{hash_password, verify_password};
pub use random::{fill_random, generate_token, random_array, MAX_TOKEN_LEN};
