//! `ledgerlock completions`: generate shell completion scripts.
//!
//! Usage:
//!   ledgerlock completions bash > ~/.bash_completion.d/ledgerlock
//!   ledgerlock completions zsh
//!   ledgerlock completions fish

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Binary name the scripts complete for.
const BIN_NAME: &str = "ledgerlock";

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
    out.flush()?;
    Ok(())
}
