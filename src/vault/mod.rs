//! Vault module: sensitive bank and card records behind the password gate.
//!
//! This module provides:
//! - Record types and the sensitive-field classification (`records`)
//! - High-level `FinanceVault` for adding, listing, revealing and re-keying (`service`)

pub mod records;
pub mod service;

// Re-export the most commonly used items.
pub use records::{
    BankInput, BankRecord, CardInput, CardRecord, CardType, EncryptedField, MaskedBank,
    MaskedCard, RevealedBank, RevealedCard, SensitiveField,
};
pub use service::FinanceVault;
