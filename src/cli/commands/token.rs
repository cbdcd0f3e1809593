//! `ledgerlock token`: print a random hex token.

use crate::errors::{LedgerLockError, Result};
use crate::field::{generate_token, MAX_TOKEN_LEN};

/// Execute the `token` command.
pub fn execute(length: usize) -> Result<()> {
    if !(1..=MAX_TOKEN_LEN).contains(&length) {
        return Err(LedgerLockError::CommandFailed(format!(
            "token length must be between 1 and {MAX_TOKEN_LEN}"
        )));
    }
    println!("{}", generate_token(length)?);
    Ok(())
}
