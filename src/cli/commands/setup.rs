//! `ledgerlock setup`: create the master password on first run.

use crate::cli::output;
use crate::cli::{open_vault, prompt_new_password, Cli, PASSWORD_ENV};
use crate::errors::{LedgerLockError, Result};

/// Execute the `setup` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;
    let auth = vault.credentials();

    // 1. Refuse early so the user is not asked for a password for nothing.
    if auth.load_or_new()?.has_credential() {
        output::tip("Use `ledgerlock change-password` to replace the master password.");
        return Err(LedgerLockError::AlreadySetUp);
    }

    // 2. Choose the password (policy is checked by the credential manager).
    let password = prompt_new_password(PASSWORD_ENV)?;
    auth.setup(&password)?;

    output::success("Master password set.");
    output::tip("Add an account with `ledgerlock bank add`.");
    Ok(())
}
