//! `ledgerlock login`: check the master password.

use crate::cli::output;
use crate::cli::{open_vault, prompt_password, Cli};
use crate::errors::{LedgerLockError, Result};

/// Execute the `login` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;
    let auth = vault.credentials();

    if auth.is_setup_required() {
        output::tip("Run `ledgerlock setup` first.");
        return Err(LedgerLockError::NotSetUp);
    }

    let password = prompt_password()?;
    if !auth.verify(&password) {
        return Err(LedgerLockError::AccessDenied);
    }

    output::success("Password accepted.");
    Ok(())
}
