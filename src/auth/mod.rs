//! Authentication: the master-password gate.
//!
//! - `CredentialManager`: setup, verify, change (`credential`)
//! - `PasswordPolicy`: strength rules for new passwords (`policy`)

pub mod credential;
pub mod policy;

pub use credential::CredentialManager;
pub use policy::{PasswordPolicy, DEFAULT_MIN_PASSWORD_LEN};
