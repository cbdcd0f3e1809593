//! `ledgerlock mask`: show how a value looks in masked form.

use crate::errors::Result;
use crate::field::mask;

/// Execute the `mask` command.
pub fn execute(value: &str, visible: usize) -> Result<()> {
    println!("{}", mask(value, visible));
    Ok(())
}
