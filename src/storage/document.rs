//! The persisted ledger document.
//!
//! One JSON document holds the credential, the field KDF parameters and
//! every sensitive record.  Callers load it, change a copy, and save the
//! whole thing back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::Argon2Params;
use crate::vault::records::{BankRecord, CardRecord};

/// Current document format version.
pub const CURRENT_VERSION: u8 = 1;

/// The single active master-password credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Sequence number, bumped on every password change.
    pub id: u64,

    /// Argon2id PHC string.
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

/// The whole ledger as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version.
    pub version: u8,

    /// When this document was first created.
    pub created_at: DateTime<Utc>,

    /// Argon2id parameters every field blob in this document was written
    /// with.  Fixed at creation.
    pub field_kdf: Argon2Params,

    /// `None` until the master password is set up.
    #[serde(default)]
    pub credential: Option<CredentialRecord>,

    #[serde(default)]
    pub banks: Vec<BankRecord>,

    #[serde(default)]
    pub cards: Vec<CardRecord>,
}

impl Document {
    /// An empty document with no credential.
    pub fn new(field_kdf: Argon2Params) -> Self {
        Self {
            version: CURRENT_VERSION,
            created_at: Utc::now(),
            field_kdf,
            credential: None,
            banks: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_no_credential() {
        let doc = Document::new(Argon2Params::default());
        assert!(!doc.has_credential());
        assert_eq!(doc.version, CURRENT_VERSION);
        assert!(doc.banks.is_empty() && doc.cards.is_empty());
    }

    #[test]
    fn json_keeps_absent_credential_as_null() {
        let doc = Document::new(Argon2Params::default());
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["credential"].is_null());
        assert_eq!(json["field_kdf"]["memory_kib"], 65_536);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let json = r#"{
            "version": 1,
            "created_at": "2026-01-01T00:00:00Z",
            "field_kdf": { "memory_kib": 8192, "iterations": 1, "parallelism": 1 }
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(doc.credential.is_none());
        assert!(doc.banks.is_empty());
    }
}
