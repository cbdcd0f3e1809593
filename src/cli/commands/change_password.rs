//! `ledgerlock change-password`: replace the master password.
//!
//! Every sensitive field is re-encrypted under the new password and the
//! result is saved in one write together with the new credential.

use crate::cli::output;
use crate::cli::{open_vault, prompt_new_password, prompt_password, Cli, NEW_PASSWORD_ENV};
use crate::errors::Result;

/// Execute the `change-password` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;

    let old = prompt_password()?;
    let new = prompt_new_password(NEW_PASSWORD_ENV)?;

    let count = vault.change_password(&old, &new)?;

    output::success(&format!(
        "Master password changed ({count} records re-encrypted)."
    ));
    Ok(())
}
