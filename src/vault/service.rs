//! High-level ledger operations used by CLI commands.
//!
//! `FinanceVault` ties the credential gate to the field cipher.  Every
//! operation that writes or reveals a sensitive value re-verifies the
//! password it is given and then uses that same password as the field
//! key; nothing about the password or a derived key is cached between
//! calls.

use chrono::Utc;

use super::records::{
    next_id, BankInput, BankRecord, CardInput, CardRecord, MaskedBank, MaskedCard, RevealedBank,
    RevealedCard,
};
use crate::auth::{CredentialManager, PasswordPolicy};
use crate::crypto::Argon2Params;
use crate::errors::{LedgerLockError, Result};
use crate::field::FieldCipher;
use crate::storage::{Document, DocumentStore};

/// The main ledger handle.
pub struct FinanceVault<S> {
    auth: CredentialManager<S>,
}

impl<S: DocumentStore> FinanceVault<S> {
    pub fn new(store: S, policy: PasswordPolicy, params: Argon2Params) -> Self {
        Self {
            auth: CredentialManager::new(store, policy, params),
        }
    }

    /// The credential gate, for the login / setup flow.
    pub fn credentials(&self) -> &CredentialManager<S> {
        &self.auth
    }

    // ------------------------------------------------------------------
    // Gate
    // ------------------------------------------------------------------

    /// Load the document and check `password` against it.
    ///
    /// A wrong password, a missing credential and an unreadable store all
    /// come back as the same `AccessDenied`.
    fn unlock(&self, password: &str) -> Result<(Document, FieldCipher)> {
        let doc = match self.auth.store().load() {
            Ok(Some(doc)) => doc,
            Ok(None) => return Err(LedgerLockError::AccessDenied),
            Err(e) => {
                tracing::error!(error = %e, "cannot read document behind the password gate");
                return Err(LedgerLockError::AccessDenied);
            }
        };

        if !CredentialManager::<S>::verify_in(&doc, password) {
            return Err(LedgerLockError::AccessDenied);
        }

        let cipher = FieldCipher::new(doc.field_kdf);
        Ok((doc, cipher))
    }

    /// Collapse any decryption failure after the gate into the generic
    /// denial, so the caller cannot tell which field failed.
    fn generic<T>(result: Result<T>) -> Result<T> {
        result.map_err(|e| {
            if e.is_auth_failure() {
                tracing::warn!("sensitive field failed integrity check after the gate passed");
                LedgerLockError::AccessDenied
            } else {
                e
            }
        })
    }

    fn load(&self) -> Result<Document> {
        self.auth.load_or_new()
    }

    // ------------------------------------------------------------------
    // Banks
    // ------------------------------------------------------------------

    /// Add a bank record; returns its id.
    pub fn add_bank(&self, password: &str, input: BankInput) -> Result<u64> {
        let (mut doc, cipher) = self.unlock(password)?;
        let id = next_id(doc.banks.iter().map(|b| b.id));
        let record = BankRecord::seal(id, Utc::now(), input, &cipher, password)?;
        doc.banks.push(record);
        self.auth.store().save(&doc)?;
        Ok(id)
    }

    /// Replace a bank record's contents, keeping its id and creation time.
    pub fn update_bank(&self, id: u64, password: &str, input: BankInput) -> Result<()> {
        let (mut doc, cipher) = self.unlock(password)?;
        let slot = doc
            .banks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(LedgerLockError::RecordNotFound { kind: "bank", id })?;
        *slot = BankRecord::seal(id, slot.created_at, input, &cipher, password)?;
        self.auth.store().save(&doc)
    }

    pub fn delete_bank(&self, id: u64) -> Result<()> {
        let mut doc = self.load()?;
        let before = doc.banks.len();
        doc.banks.retain(|b| b.id != id);
        if doc.banks.len() == before {
            return Err(LedgerLockError::RecordNotFound { kind: "bank", id });
        }
        self.auth.store().save(&doc)
    }

    /// Every bank record with its sensitive fields masked.
    pub fn list_banks(&self) -> Result<Vec<MaskedBank>> {
        Ok(self.load()?.banks.iter().map(BankRecord::masked).collect())
    }

    /// Reveal one bank record after re-verifying `password`.
    pub fn reveal_bank(&self, id: u64, password: &str) -> Result<RevealedBank> {
        let (doc, cipher) = self.unlock(password)?;
        let record = doc
            .banks
            .iter()
            .find(|b| b.id == id)
            .ok_or(LedgerLockError::RecordNotFound { kind: "bank", id })?;
        Self::generic(record.reveal(&cipher, password))
    }

    // ------------------------------------------------------------------
    // Cards
    // ------------------------------------------------------------------

    pub fn add_card(&self, password: &str, input: CardInput) -> Result<u64> {
        let (mut doc, cipher) = self.unlock(password)?;
        let id = next_id(doc.cards.iter().map(|c| c.id));
        let record = CardRecord::seal(id, Utc::now(), input, &cipher, password)?;
        doc.cards.push(record);
        self.auth.store().save(&doc)?;
        Ok(id)
    }

    pub fn update_card(&self, id: u64, password: &str, input: CardInput) -> Result<()> {
        let (mut doc, cipher) = self.unlock(password)?;
        let slot = doc
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(LedgerLockError::RecordNotFound { kind: "card", id })?;
        *slot = CardRecord::seal(id, slot.created_at, input, &cipher, password)?;
        self.auth.store().save(&doc)
    }

    pub fn delete_card(&self, id: u64) -> Result<()> {
        let mut doc = self.load()?;
        let before = doc.cards.len();
        doc.cards.retain(|c| c.id != id);
        if doc.cards.len() == before {
            return Err(LedgerLockError::RecordNotFound { kind: "card", id });
        }
        self.auth.store().save(&doc)
    }

    pub fn list_cards(&self) -> Result<Vec<MaskedCard>> {
        Ok(self.load()?.cards.iter().map(CardRecord::masked).collect())
    }

    pub fn reveal_card(&self, id: u64, password: &str) -> Result<RevealedCard> {
        let (doc, cipher) = self.unlock(password)?;
        let record = doc
            .cards
            .iter()
            .find(|c| c.id == id)
            .ok_or(LedgerLockError::RecordNotFound { kind: "card", id })?;
        Self::generic(record.reveal(&cipher, password))
    }

    // ------------------------------------------------------------------
    // Whole-ledger operations
    // ------------------------------------------------------------------

    /// Change the master password and re-encrypt every sensitive field.
    ///
    /// Returns the number of records re-encrypted.  Either the new
    /// credential and all re-keyed fields are saved together, or nothing
    /// changes.
    pub fn change_password(&self, old: &str, new: &str) -> Result<usize> {
        let mut rekeyed = 0;
        self.auth.change_password(old, new, |doc| {
            let cipher = FieldCipher::new(doc.field_kdf);
            for bank in &mut doc.banks {
                Self::generic(bank.rekey(&cipher, old, new))?;
            }
            for card in &mut doc.cards {
                Self::generic(card.rekey(&cipher, old, new))?;
            }
            rekeyed = doc.banks.len() + doc.cards.len();
            Ok(())
        })?;
        Ok(rekeyed)
    }

    /// Erase everything, credential included.
    pub fn wipe(&self) -> Result<()> {
        self.auth
            .store()
            .save(&Document::new(*self.auth.params()))?;
        tracing::warn!("ledger wiped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::MIN_MEMORY_KIB;
    use crate::field::MASK_PLACEHOLDER;
    use crate::storage::MemoryStore;
    use crate::vault::records::CardType;

    const FAST: Argon2Params = Argon2Params {
        memory_kib: MIN_MEMORY_KIB,
        iterations: 1,
        parallelism: 1,
    };

    fn vault() -> FinanceVault<MemoryStore> {
        let v = FinanceVault::new(MemoryStore::new(), PasswordPolicy::default(), FAST);
        v.credentials().setup("hunter22").unwrap();
        v
    }

    fn bank() -> BankInput {
        BankInput {
            bank_name: "State Bank".into(),
            account_holder: "A. Holder".into(),
            account_number: "1234567890123456".into(),
            netbanking_id: Some("netuser01".into()),
            ..BankInput::default()
        }
    }

    fn card() -> CardInput {
        CardInput {
            bank_name: "HDFC".into(),
            card_type: CardType::Credit,
            card_number: "4111111111111111".into(),
            expiry_date: Some("2029-04".into()),
            billing_cycle: Some("1-30".into()),
            credit_limit: Some(100_000.0),
            current_due: Some(0.0),
            comments: None,
        }
    }

    #[test]
    fn add_list_reveal_bank() {
        let v = vault();
        let id = v.add_bank("hunter22", bank()).unwrap();
        assert_eq!(id, 1);

        let listed = v.list_banks().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].account_number, MASK_PLACEHOLDER);
        assert_eq!(listed[0].netbanking_id.as_deref(), Some(MASK_PLACEHOLDER));

        let revealed = v.reveal_bank(id, "hunter22").unwrap();
        assert_eq!(revealed.account_number.as_str(), "1234567890123456");
    }

    #[test]
    fn stored_document_leaks_no_suffix_or_length() {
        let v = vault();
        v.add_bank(
            "hunter22",
            BankInput {
                netbanking_id: Some("alice.k.2024".into()),
                ..bank()
            },
        )
        .unwrap();

        let json = serde_json::to_string(&v.credentials().store().snapshot().unwrap()).unwrap();
        assert!(!json.contains("alice"));
        assert!(!json.contains(".2024"));
        assert!(!json.contains("suffix"));
        assert!(!json.contains("hidden_len"));
    }

    #[test]
    fn wrong_password_never_reaches_the_record() {
        let v = vault();
        let id = v.add_bank("hunter22", bank()).unwrap();

        assert!(matches!(
            v.reveal_bank(id, "hunter23"),
            Err(LedgerLockError::AccessDenied)
        ));
        // Unknown ids are only reported once the gate has passed.
        assert!(matches!(
            v.reveal_bank(99, "hunter23"),
            Err(LedgerLockError::AccessDenied)
        ));
        assert!(matches!(
            v.reveal_bank(99, "hunter22"),
            Err(LedgerLockError::RecordNotFound { kind: "bank", id: 99 })
        ));
    }

    #[test]
    fn edits_require_the_password() {
        let v = vault();
        assert!(matches!(
            v.add_bank("nope-nope", bank()),
            Err(LedgerLockError::AccessDenied)
        ));
        assert!(v.list_banks().unwrap().is_empty());
    }

    #[test]
    fn tampered_blob_reports_generic_denial() {
        let v = vault();
        let id = v.add_bank("hunter22", bank()).unwrap();

        let mut doc = v.credentials().store().snapshot().unwrap();
        let blob = &mut doc.banks[0].account_number.blob;
        let flipped = if blob.starts_with('A') { "B" } else { "A" };
        blob.replace_range(0..1, flipped);
        v.credentials().store().save(&doc).unwrap();

        let err = v.reveal_bank(id, "hunter22").err().unwrap();
        assert!(matches!(err, LedgerLockError::AccessDenied));
        assert_eq!(err.to_string(), crate::errors::GENERIC_AUTH_FAILURE);
    }

    #[test]
    fn update_reencrypts_with_fresh_blob() {
        let v = vault();
        let id = v.add_bank("hunter22", bank()).unwrap();
        let before = v.credentials().store().snapshot().unwrap().banks[0].clone();

        v.update_bank(id, "hunter22", bank()).unwrap();

        let after = v.credentials().store().snapshot().unwrap().banks[0].clone();
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_ne!(after.account_number.blob, before.account_number.blob);
    }

    #[test]
    fn delete_bank_and_missing_ids() {
        let v = vault();
        let id = v.add_bank("hunter22", bank()).unwrap();
        v.delete_bank(id).unwrap();
        assert!(v.list_banks().unwrap().is_empty());
        assert!(matches!(
            v.delete_bank(id),
            Err(LedgerLockError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn card_numbers_are_ciphertext_at_rest() {
        let v = vault();
        let id = v.add_card("hunter22", card()).unwrap();

        let json = serde_json::to_string(&v.credentials().store().snapshot().unwrap()).unwrap();
        assert!(!json.contains("4111111111111111"));

        assert_eq!(v.list_cards().unwrap()[0].card_number, MASK_PLACEHOLDER);
        assert_eq!(
            v.reveal_card(id, "hunter22").unwrap().card_number.as_str(),
            "4111111111111111"
        );
    }

    #[test]
    fn change_password_rekeys_every_record() {
        let v = vault();
        let bank_id = v.add_bank("hunter22", bank()).unwrap();
        let card_id = v.add_card("hunter22", card()).unwrap();

        let count = v.change_password("hunter22", "correct-horse").unwrap();
        assert_eq!(count, 2);

        assert!(v.reveal_bank(bank_id, "hunter22").is_err());
        assert_eq!(
            v.reveal_bank(bank_id, "correct-horse")
                .unwrap()
                .account_number
                .as_str(),
            "1234567890123456"
        );
        assert_eq!(
            v.reveal_card(card_id, "correct-horse")
                .unwrap()
                .card_number
                .as_str(),
            "4111111111111111"
        );
    }

    #[test]
    fn failed_change_keeps_old_password_and_blobs() {
        let v = vault();
        v.add_bank("hunter22", bank()).unwrap();
        let before = v.credentials().store().snapshot();

        v.credentials().store().set_fail_writes(true);
        assert!(v.change_password("hunter22", "correct-horse").is_err());
        v.credentials().store().set_fail_writes(false);

        assert_eq!(v.credentials().store().snapshot(), before);
        assert!(v.credentials().verify("hunter22"));
    }

    #[test]
    fn wipe_returns_to_setup() {
        let v = vault();
        v.add_bank("hunter22", bank()).unwrap();

        v.wipe().unwrap();

        assert!(v.credentials().is_setup_required());
        assert!(v.list_banks().unwrap().is_empty());
        assert!(!v.credentials().verify("hunter22"));
    }
}
