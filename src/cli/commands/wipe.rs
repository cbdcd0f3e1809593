//! `ledgerlock wipe`: erase every record and the master password.

use crate::cli::output;
use crate::cli::{confirm, open_vault, Cli};
use crate::errors::Result;

/// Execute the `wipe` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let vault = open_vault(cli)?;

    if !force
        && !confirm("Erase all bank accounts, cards and the master password? This cannot be undone")?
    {
        output::info("Cancelled.");
        return Ok(());
    }

    vault.wipe()?;
    output::success("Ledger erased. Run `ledgerlock setup` to start again.");
    Ok(())
}
