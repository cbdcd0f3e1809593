//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{LedgerLockError, Result};
use crate::field::{DEFAULT_TOKEN_LEN, DEFAULT_VISIBLE_SUFFIX};
use crate::storage::JsonFileStore;
use crate::vault::{CardType, FinanceVault};

/// Environment variable read before prompting for the master password.
pub const PASSWORD_ENV: &str = "LEDGERLOCK_PASSWORD";

/// Environment variable read before prompting for a replacement password.
pub const NEW_PASSWORD_ENV: &str = "LEDGERLOCK_NEW_PASSWORD";

/// LedgerLock CLI: master-password gate for a local finance ledger.
#[derive(Parser)]
#[command(
    name = "ledgerlock",
    about = "Password-protected bank and card records for a local finance ledger",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the ledger document (default: from config, else .ledgerlock)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Set up the master password (first run)
    Setup,

    /// Check the master password
    Login,

    /// Change the master password and re-encrypt every sensitive field
    ChangePassword,

    /// Manage bank accounts
    Bank {
        #[command(subcommand)]
        action: BankAction,
    },

    /// Manage cards
    Card {
        #[command(subcommand)]
        action: CardAction,
    },

    /// Mask a value the way sensitive fields are displayed
    Mask {
        /// Value to mask
        value: String,
        /// Number of trailing characters left visible
        #[arg(long, default_value_t = DEFAULT_VISIBLE_SUFFIX)]
        visible: usize,
    },

    /// Print a random hex token
    Token {
        /// Number of random bytes (the token has twice as many hex digits)
        #[arg(long, default_value_t = DEFAULT_TOKEN_LEN)]
        length: usize,
    },

    /// Erase the whole ledger, master password included
    Wipe {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Bank subcommands.
#[derive(clap::Subcommand)]
pub enum BankAction {
    /// Add a bank account
    Add(BankArgs),

    /// Replace a bank account's details
    Edit {
        /// Record id
        id: u64,
        #[command(flatten)]
        args: BankArgs,
    },

    /// List bank accounts with sensitive fields masked
    List,

    /// Show one bank account unmasked (asks for the password)
    Reveal {
        /// Record id
        id: u64,
    },

    /// Delete a bank account
    Delete {
        /// Record id
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Fields of a bank account.
#[derive(clap::Args)]
pub struct BankArgs {
    /// Bank name
    #[arg(long)]
    pub bank_name: String,

    /// Account holder name
    #[arg(long)]
    pub holder: String,

    /// Account number (omit for a hidden prompt)
    #[arg(long)]
    pub account_number: Option<String>,

    /// IFSC code
    #[arg(long)]
    pub ifsc: Option<String>,

    /// UPI id
    #[arg(long)]
    pub upi: Option<String>,

    /// Registered phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Net-banking user id
    #[arg(long)]
    pub netbanking_id: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub comments: Option<String>,
}

/// Card subcommands.
#[derive(clap::Subcommand)]
pub enum CardAction {
    /// Add a card
    Add(CardArgs),

    /// Replace a card's details
    Edit {
        /// Record id
        id: u64,
        #[command(flatten)]
        args: CardArgs,
    },

    /// List cards with card numbers masked
    List,

    /// Show one card unmasked (asks for the password)
    Reveal {
        /// Record id
        id: u64,
    },

    /// Delete a card
    Delete {
        /// Record id
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Fields of a card.
#[derive(clap::Args)]
pub struct CardArgs {
    /// Issuing bank
    #[arg(long)]
    pub bank_name: String,

    /// credit or debit
    #[arg(long, default_value = "credit", value_parser = parse_card_type)]
    pub card_type: CardType,

    /// Card number (omit for a hidden prompt)
    #[arg(long)]
    pub card_number: Option<String>,

    /// Expiry, e.g. 2029-04
    #[arg(long)]
    pub expiry: Option<String>,

    /// Billing cycle, e.g. 1-30 (credit cards only)
    #[arg(long)]
    pub billing_cycle: Option<String>,

    /// Credit limit (credit cards only)
    #[arg(long)]
    pub credit_limit: Option<f64>,

    /// Current amount due (credit cards only)
    #[arg(long)]
    pub current_due: Option<f64>,

    /// Free-form notes
    #[arg(long)]
    pub comments: Option<String>,
}

fn parse_card_type(s: &str) -> std::result::Result<CardType, String> {
    s.parse().map_err(|e: LedgerLockError| e.to_string())
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Read a password from `env_var`, falling back to a hidden prompt.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
fn password_from_env_or_prompt(env_var: &str, prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| LedgerLockError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Get the master password: `LEDGERLOCK_PASSWORD`, else a prompt.
///
/// Called once per command; nothing is remembered between commands.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    password_from_env_or_prompt(PASSWORD_ENV, "Master password")
}

/// Prompt for a new password with confirmation.
///
/// `env_var` is checked first for scripted use.  The strength policy is
/// enforced by the credential manager, not here.
pub fn prompt_new_password(env_var: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let password = dialoguer::Password::new()
        .with_prompt("Choose master password")
        .with_confirmation(
            "Confirm master password",
            "Passwords do not match, try again",
        )
        .interact()
        .map_err(|e| LedgerLockError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(password))
}

/// Hidden prompt for a sensitive field value that was not passed inline.
pub fn prompt_secret_value(inline: Option<&str>, label: &str) -> Result<Zeroizing<String>> {
    if let Some(v) = inline {
        output::warning(&format!(
            "{label} provided on the command line; it may appear in shell history."
        ));
        return Ok(Zeroizing::new(v.to_string()));
    }

    let value = dialoguer::Password::new()
        .with_prompt(format!("Enter {label}"))
        .interact()
        .map_err(|e| LedgerLockError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}

/// Ask for a yes/no confirmation (default: no).
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| LedgerLockError::CommandFailed(format!("confirm prompt: {e}")))
}

/// Resolve the ledger document path from config and CLI arguments.
///
/// Example: `<cwd>/.ledgerlock/ledger.json`
pub fn document_path(cli: &Cli) -> Result<(Settings, PathBuf)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = settings.document_path(&cwd, cli.data_dir.as_deref());
    Ok((settings, path))
}

/// Open the ledger at the resolved path.
pub fn open_vault(cli: &Cli) -> Result<FinanceVault<JsonFileStore>> {
    let (settings, path) = document_path(cli)?;
    Ok(FinanceVault::new(
        JsonFileStore::new(path),
        settings.password_policy(),
        settings.argon2_params(),
    ))
}
