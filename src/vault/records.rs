//! Bank and card records and the sensitive-field classification.
//!
//! Every value named by `SensitiveField` is stored as an `EncryptedField`.
//! Because the record structs hold `EncryptedField` for exactly those
//! values, "ciphertext at rest" is a property of the schema rather than
//! of whichever code path wrote the record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::errors::{LedgerLockError, Result};
use crate::field::mask::{mask, DEFAULT_VISIBLE_SUFFIX, MASK_PLACEHOLDER};
use crate::field::FieldCipher;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Every field that is encrypted at rest and masked on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitiveField {
    AccountNumber,
    RegisteredPhone,
    NetbankingId,
    CardNumber,
}

impl SensitiveField {
    pub const ALL: [SensitiveField; 4] = [
        SensitiveField::AccountNumber,
        SensitiveField::RegisteredPhone,
        SensitiveField::NetbankingId,
        SensitiveField::CardNumber,
    ];

    /// Trailing characters left readable when a plaintext value is masked.
    pub const fn visible_suffix(self) -> usize {
        match self {
            Self::AccountNumber | Self::RegisteredPhone | Self::NetbankingId | Self::CardNumber => {
                DEFAULT_VISIBLE_SUFFIX
            }
        }
    }

    /// Mask a plaintext value of this field for display.
    pub fn mask(self, value: &str) -> String {
        mask(value, self.visible_suffix())
    }

    /// Name used in the document and in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccountNumber => "account_number",
            Self::RegisteredPhone => "registered_phone",
            Self::NetbankingId => "netbanking_id",
            Self::CardNumber => "card_number",
        }
    }
}

impl fmt::Display for SensitiveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// EncryptedField
// ---------------------------------------------------------------------------

/// A sensitive value as stored: only its field blob.
///
/// Nothing derived from the plaintext sits next to the blob, so the
/// default display of an encrypted field is the fixed placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptedField {
    /// Base64 `salt ‖ iv ‖ tag ‖ ciphertext`.
    pub blob: String,
}

impl EncryptedField {
    /// Encrypt `plaintext` for `field` under `password`.
    pub fn seal(
        cipher: &FieldCipher,
        field: SensitiveField,
        plaintext: &str,
        password: &str,
    ) -> Result<Self> {
        let blob = cipher.encrypt(plaintext, password).map_err(|e| {
            tracing::error!(%field, error = %e, "failed to encrypt sensitive field");
            e
        })?;
        Ok(Self { blob })
    }

    /// Masked view, no password needed.
    pub fn masked(&self) -> String {
        MASK_PLACEHOLDER.to_string()
    }

    /// Decrypt the value.
    pub fn reveal(&self, cipher: &FieldCipher, password: &str) -> Result<Zeroizing<String>> {
        cipher.decrypt_zeroizing(&self.blob, password)
    }

    /// Re-encrypt under `new_password`, with a fresh salt and IV.
    pub fn rekey(
        &self,
        cipher: &FieldCipher,
        field: SensitiveField,
        old_password: &str,
        new_password: &str,
    ) -> Result<Self> {
        let plaintext = self.reveal(cipher, old_password)?;
        Self::seal(cipher, field, &plaintext, new_password)
    }
}

/// Seal an optional value; empty strings are treated as absent.
fn seal_optional(
    cipher: &FieldCipher,
    field: SensitiveField,
    value: Option<&str>,
    password: &str,
) -> Result<Option<EncryptedField>> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => EncryptedField::seal(cipher, field, v, password).map(Some),
        None => Ok(None),
    }
}

fn rekey_optional(
    value: Option<&EncryptedField>,
    cipher: &FieldCipher,
    field: SensitiveField,
    old_password: &str,
    new_password: &str,
) -> Result<Option<EncryptedField>> {
    value
        .map(|v| v.rekey(cipher, field, old_password, new_password))
        .transpose()
}

fn reveal_optional(
    value: Option<&EncryptedField>,
    cipher: &FieldCipher,
    password: &str,
) -> Result<Option<Zeroizing<String>>> {
    value.map(|v| v.reveal(cipher, password)).transpose()
}

/// Normalize optional free-text input: trim, and map empty to `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LedgerLockError::InvalidRecord(format!("{what} is required")));
    }
    Ok(())
}

/// Next record id: one past the largest id in use.
pub(crate) fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

// ---------------------------------------------------------------------------
// Bank records
// ---------------------------------------------------------------------------

/// Plaintext input for creating or updating a bank record.
#[derive(Clone, Default)]
pub struct BankInput {
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc_code: Option<String>,
    pub upi_id: Option<String>,
    pub registered_phone: Option<String>,
    pub netbanking_id: Option<String>,
    pub comments: Option<String>,
}

impl BankInput {
    fn validate(&self) -> Result<()> {
        require(&self.bank_name, "bank name")?;
        require(&self.account_holder, "account holder")?;
        require(&self.account_number, "account number")
    }
}

/// A bank account as persisted in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    pub id: u64,
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: EncryptedField,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub upi_id: Option<String>,
    #[serde(default)]
    pub registered_phone: Option<EncryptedField>,
    #[serde(default)]
    pub netbanking_id: Option<EncryptedField>,
    #[serde(default)]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BankRecord {
    /// Build a record from plaintext input, encrypting every sensitive field.
    pub fn seal(
        id: u64,
        created_at: DateTime<Utc>,
        input: BankInput,
        cipher: &FieldCipher,
        password: &str,
    ) -> Result<Self> {
        input.validate()?;
        Ok(Self {
            id,
            account_number: EncryptedField::seal(
                cipher,
                SensitiveField::AccountNumber,
                input.account_number.trim(),
                password,
            )?,
            registered_phone: seal_optional(
                cipher,
                SensitiveField::RegisteredPhone,
                input.registered_phone.as_deref().map(str::trim),
                password,
            )?,
            netbanking_id: seal_optional(
                cipher,
                SensitiveField::NetbankingId,
                input.netbanking_id.as_deref().map(str::trim),
                password,
            )?,
            bank_name: input.bank_name.trim().to_string(),
            account_holder: input.account_holder.trim().to_string(),
            ifsc_code: non_empty(input.ifsc_code),
            upi_id: non_empty(input.upi_id),
            comments: non_empty(input.comments),
            created_at,
        })
    }

    /// Default display: every sensitive field masked.
    pub fn masked(&self) -> MaskedBank {
        MaskedBank {
            id: self.id,
            bank_name: self.bank_name.clone(),
            account_holder: self.account_holder.clone(),
            account_number: self.account_number.masked(),
            ifsc_code: self.ifsc_code.clone(),
            upi_id: self.upi_id.clone(),
            registered_phone: self.registered_phone.as_ref().map(EncryptedField::masked),
            netbanking_id: self.netbanking_id.as_ref().map(EncryptedField::masked),
            comments: self.comments.clone(),
            created_at: self.created_at,
        }
    }

    /// Decrypt every sensitive field, one after another.
    pub fn reveal(&self, cipher: &FieldCipher, password: &str) -> Result<RevealedBank> {
        Ok(RevealedBank {
            id: self.id,
            bank_name: self.bank_name.clone(),
            account_holder: self.account_holder.clone(),
            account_number: self.account_number.reveal(cipher, password)?,
            ifsc_code: self.ifsc_code.clone(),
            upi_id: self.upi_id.clone(),
            registered_phone: reveal_optional(self.registered_phone.as_ref(), cipher, password)?,
            netbanking_id: reveal_optional(self.netbanking_id.as_ref(), cipher, password)?,
            comments: self.comments.clone(),
            created_at: self.created_at,
        })
    }

    /// Re-encrypt every sensitive field under a new password.
    pub fn rekey(&mut self, cipher: &FieldCipher, old_password: &str, new_password: &str) -> Result<()> {
        self.account_number = self.account_number.rekey(
            cipher,
            SensitiveField::AccountNumber,
            old_password,
            new_password,
        )?;
        self.registered_phone = rekey_optional(
            self.registered_phone.as_ref(),
            cipher,
            SensitiveField::RegisteredPhone,
            old_password,
            new_password,
        )?;
        self.netbanking_id = rekey_optional(
            self.netbanking_id.as_ref(),
            cipher,
            SensitiveField::NetbankingId,
            old_password,
            new_password,
        )?;
        Ok(())
    }
}

/// Bank record as shown by default.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedBank {
    pub id: u64,
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc_code: Option<String>,
    pub upi_id: Option<String>,
    pub registered_phone: Option<String>,
    pub netbanking_id: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Bank record after a successful reveal.  Secrets are wiped on drop.
pub struct RevealedBank {
    pub id: u64,
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: Zeroizing<String>,
    pub ifsc_code: Option<String>,
    pub upi_id: Option<String>,
    pub registered_phone: Option<Zeroizing<String>>,
    pub netbanking_id: Option<Zeroizing<String>>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Card records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Credit,
    Debit,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => f.write_str("Credit"),
            Self::Debit => f.write_str("Debit"),
        }
    }
}

impl FromStr for CardType {
    type Err = LedgerLockError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            other => Err(LedgerLockError::InvalidRecord(format!(
                "unknown card type '{other}' (expected credit or debit)"
            ))),
        }
    }
}

/// Plaintext input for creating or updating a card record.
#[derive(Clone)]
pub struct CardInput {
    pub bank_name: String,
    pub card_type: CardType,
    pub card_number: String,
    pub expiry_date: Option<String>,
    pub billing_cycle: Option<String>,
    pub credit_limit: Option<f64>,
    pub current_due: Option<f64>,
    pub comments: Option<String>,
}

impl CardInput {
    fn validate(&self) -> Result<()> {
        require(&self.bank_name, "bank name")?;
        require(&self.card_number, "card number")?;
        for (what, amount) in [
            ("credit limit", self.credit_limit),
            ("current due", self.current_due),
        ] {
            if amount.is_some_and(|a| !a.is_finite() || a < 0.0) {
                return Err(LedgerLockError::InvalidRecord(format!(
                    "{what} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

/// A card as persisted in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: u64,
    pub bank_name: String,
    pub card_type: CardType,
    pub card_number: EncryptedField,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub billing_cycle: Option<String>,
    #[serde(default)]
    pub credit_limit: Option<f64>,
    #[serde(default)]
    pub current_due: Option<f64>,
    #[serde(default)]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CardRecord {
    /// Build a record from plaintext input.
    ///
    /// Billing cycle, credit limit and current due only apply to credit
    /// cards and are dropped for debit cards.
    pub fn seal(
        id: u64,
        created_at: DateTime<Utc>,
        input: CardInput,
        cipher: &FieldCipher,
        password: &str,
    ) -> Result<Self> {
        input.validate()?;
        let credit = input.card_type == CardType::Credit;
        Ok(Self {
            id,
            card_number: EncryptedField::seal(
                cipher,
                SensitiveField::CardNumber,
                input.card_number.trim(),
                password,
            )?,
            bank_name: input.bank_name.trim().to_string(),
            card_type: input.card_type,
            expiry_date: non_empty(input.expiry_date),
            billing_cycle: if credit { non_empty(input.billing_cycle) } else { None },
            credit_limit: if credit { input.credit_limit } else { None },
            current_due: if credit { input.current_due } else { None },
            comments: non_empty(input.comments),
            created_at,
        })
    }

    pub fn masked(&self) -> MaskedCard {
        MaskedCard {
            id: self.id,
            bank_name: self.bank_name.clone(),
            card_type: self.card_type,
            card_number: self.card_number.masked(),
            expiry_date: self.expiry_date.clone(),
            billing_cycle: self.billing_cycle.clone(),
            credit_limit: self.credit_limit,
            current_due: self.current_due,
            comments: self.comments.clone(),
            created_at: self.created_at,
        }
    }

    pub fn reveal(&self, cipher: &FieldCipher, password: &str) -> Result<RevealedCard> {
        Ok(RevealedCard {
            id: self.id,
            bank_name: self.bank_name.clone(),
            card_type: self.card_type,
            card_number: self.card_number.reveal(cipher, password)?,
            expiry_date: self.expiry_date.clone(),
            billing_cycle: self.billing_cycle.clone(),
            credit_limit: self.credit_limit,
            current_due: self.current_due,
            comments: self.comments.clone(),
            created_at: self.created_at,
        })
    }

    pub fn rekey(&mut self, cipher: &FieldCipher, old_password: &str, new_password: &str) -> Result<()> {
        self.card_number =
            self.card_number
                .rekey(cipher, SensitiveField::CardNumber, old_password, new_password)?;
        Ok(())
    }
}

/// Card as shown by default.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedCard {
    pub id: u64,
    pub bank_name: String,
    pub card_type: CardType,
    pub card_number: String,
    pub expiry_date: Option<String>,
    pub billing_cycle: Option<String>,
    pub credit_limit: Option<f64>,
    pub current_due: Option<f64>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Card after a successful reveal.  The card number is wiped on drop.
pub struct RevealedCard {
    pub id: u64,
    pub bank_name: String,
    pub card_type: CardType,
    pub card_number: Zeroizing<String>,
    pub expiry_date: Option<String>,
    pub billing_cycle: Option<String>,
    pub credit_limit: Option<f64>,
    pub current_due: Option<f64>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
