use std::path::PathBuf;
use thiserror::Error;

/// Generic message shown for every authentication or integrity failure.
///
/// Gate failures and per-field decryption failures render identically so
/// the output never tells which check rejected the password.
pub const GENERIC_AUTH_FAILURE: &str = "Incorrect password. Please try again.";

/// All errors that can occur in LedgerLock.
#[derive(Debug, Error)]
pub enum LedgerLockError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("{}", GENERIC_AUTH_FAILURE)]
    IntegrityFailure,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashFailed(String),

    #[error("Random number generator failed: {0}")]
    RandomFailed(String),

    // --- Credential errors ---
    #[error("{}", GENERIC_AUTH_FAILURE)]
    AccessDenied,

    #[error("A master password is already set up (use `change-password`)")]
    AlreadySetUp,

    #[error("No master password is set up yet (run `ledgerlock setup`)")]
    NotSetUp,

    #[error("Password must be at least {min_len} characters")]
    WeakPassword { min_len: usize },

    // --- Record errors ---
    #[error("{kind} #{id} not found")]
    RecordNotFound { kind: &'static str, id: u64 },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // --- Storage errors ---
    #[error("Invalid document at {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl LedgerLockError {
    /// Returns `true` for the failures that render as the generic
    /// "incorrect password" message.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AccessDenied | Self::IntegrityFailure)
    }
}

/// Convenience type alias for LedgerLock results.
pub type Result<T> = std::result::Result<T, LedgerLockError>;
