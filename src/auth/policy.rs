//! Master-password strength policy.

use crate::errors::{LedgerLockError, Result};

/// Default minimum password length.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

/// Rules a new master password must satisfy.
///
/// Enforced by the credential manager itself so that every caller (CLI,
/// restore flows, tests) goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl PasswordPolicy {
    /// Check a candidate password.
    pub fn check(&self, password: &str) -> Result<()> {
        if password.chars().count() < self.min_length {
            return Err(LedgerLockError::WeakPassword {
                min_len: self.min_length,
            });
        }
        Ok(())
    }
}
