//! Master-password lifecycle: setup, verification, change.
//!
//! The document holds at most one `CredentialRecord`.  `setup` creates
//! it, `change_password` replaces it in the same write that re-keys any
//! dependent data, and only a wholesale wipe removes it.
//!
//! `verify` and `is_setup_required` never surface storage errors; they
//! log them and answer `false`, so a broken store never unlocks anything.

use chrono::Utc;

use super::policy::PasswordPolicy;
use crate::crypto::{hash_password, verify_password, Argon2Params};
use crate::errors::{LedgerLockError, Result};
use crate::storage::{CredentialRecord, Document, DocumentStore};

pub struct CredentialManager<S> {
    store: S,
    policy: PasswordPolicy,
    params: Argon2Params,
}

impl<S: DocumentStore> CredentialManager<S> {
    /// `params` sets the cost of new password hashes and the field KDF of
    /// documents created by `setup`.
    pub fn new(store: S, policy: PasswordPolicy, params: Argon2Params) -> Self {
        Self {
            store,
            policy,
            params,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn params(&self) -> &Argon2Params {
        &self.params
    }

    /// Load the stored document, or a fresh empty one if none exists yet.
    pub fn load_or_new(&self) -> Result<Document> {
        Ok(self
            .store
            .load()?
            .unwrap_or_else(|| Document::new(self.params)))
    }

    /// `true` iff no master password has been set up.
    pub fn is_setup_required(&self) -> bool {
        match self.store.load() {
            Ok(Some(doc)) => !doc.has_credential(),
            Ok(None) => true,
            Err(e) => {
                tracing::error!(error = %e, "cannot read document while checking setup state");
                false
            }
        }
    }

    /// Set up the master password.
    ///
    /// Fails if one already exists, if `password` violates the policy, or
    /// if the document cannot be read or written.  Nothing is persisted
    /// unless the whole operation succeeds.
    pub fn setup(&self, password: &str) -> Result<()> {
        self.policy.check(password)?;

        let mut doc = self.load_or_new()?;
        if doc.has_credential() {
            return Err(LedgerLockError::AlreadySetUp);
        }

        doc.credential = Some(CredentialRecord {
            id: 1,
            password_hash: hash_password(password.as_bytes(), &self.params)?,
            created_at: Utc::now(),
        });

        self.store.save(&doc).map_err(|e| {
            tracing::error!(error = %e, "failed to persist master password");
            e
        })?;

        tracing::info!("master password set up");
        Ok(())
    }

    /// Check `password` against the active credential.
    ///
    /// `false` for a wrong password, when nothing is set up, and on any
    /// storage or hash-format failure.
    pub fn verify(&self, password: &str) -> bool {
        match self.store.load() {
            Ok(Some(doc)) => Self::verify_in(&doc, password),
            Ok(None) => false,
            Err(e) => {
                tracing::error!(error = %e, "cannot read document during verification");
                false
            }
        }
    }

    /// Check `password` against the credential of an already loaded
    /// document.
    pub fn verify_in(doc: &Document, password: &str) -> bool {
        let Some(record) = doc.credential.as_ref() else {
            return false;
        };

        match verify_password(password.as_bytes(), &record.password_hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!(error = %e, credential_id = record.id, "stored password hash is unusable");
                false
            }
        }
    }

    /// Replace the master password.
    ///
    /// `old` must verify.  `reencrypt` receives the loaded document and
    /// must move every value keyed by the old password over to the new
    /// one; the credential swap and its changes are saved in a single
    /// write, or not at all.
    pub fn change_password<F>(&self, old: &str, new: &str, reencrypt: F) -> Result<()>
    where
        F: FnOnce(&mut Document) -> Result<()>,
    {
        let mut doc = self.store.load()?.ok_or(LedgerLockError::NotSetUp)?;
        let current_id = match doc.credential.as_ref() {
            Some(record) => record.id,
            None => return Err(LedgerLockError::NotSetUp),
        };

        if !Self::verify_in(&doc, old) {
            return Err(LedgerLockError::AccessDenied);
        }
        self.policy.check(new)?;

        let password_hash = hash_password(new.as_bytes(), &self.params)?;
        reencrypt(&mut doc)?;

        doc.credential = Some(CredentialRecord {
            id: current_id + 1,
            password_hash,
            created_at: Utc::now(),
        });

        self.store.save(&doc).map_err(|e| {
            tracing::error!(error = %e, "failed to persist password change");
            e
        })?;

        tracing::info!(credential_id = current_id + 1, "master password changed");
        Ok(())
    }
}
