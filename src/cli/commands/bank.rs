//! `ledgerlock bank`: add, edit, list, reveal and delete bank accounts.

use crate::cli::output;
use crate::cli::{confirm, open_vault, prompt_password, prompt_secret_value, BankAction, BankArgs, Cli};
use crate::errors::Result;
use crate::vault::{BankInput, SensitiveField};

/// Execute a `bank` subcommand.
pub fn execute(cli: &Cli, action: &BankAction) -> Result<()> {
    match action {
        BankAction::Add(args) => add(cli, args),
        BankAction::Edit { id, args } => edit(cli, *id, args),
        BankAction::List => list(cli),
        BankAction::Reveal { id } => reveal(cli, *id),
        BankAction::Delete { id, force } => delete(cli, *id, *force),
    }
}

/// Turn CLI arguments into record input, prompting for the account number
/// if it was not given inline.
fn input_from_args(args: &BankArgs) -> Result<BankInput> {
    let account_number = prompt_secret_value(args.account_number.as_deref(), "account number")?;
    Ok(BankInput {
        bank_name: args.bank_name.clone(),
        account_holder: args.holder.clone(),
        account_number: account_number.to_string(),
        ifsc_code: args.ifsc.clone(),
        upi_id: args.upi.clone(),
        registered_phone: args.phone.clone(),
        netbanking_id: args.netbanking_id.clone(),
        comments: args.comments.clone(),
    })
}

fn add(cli: &Cli, args: &BankArgs) -> Result<()> {
    let vault = open_vault(cli)?;
    let input = input_from_args(args)?;
    let preview = SensitiveField::AccountNumber.mask(input.account_number.trim());
    let password = prompt_password()?;

    let id = vault.add_bank(&password, input)?;

    output::success(&format!(
        "Added bank account {id} ({} {preview})",
        args.bank_name.trim()
    ));
    Ok(())
}

fn edit(cli: &Cli, id: u64, args: &BankArgs) -> Result<()> {
    let vault = open_vault(cli)?;
    let input = input_from_args(args)?;
    let password = prompt_password()?;

    vault.update_bank(id, &password, input)?;

    output::success(&format!("Updated bank account {id}"));
    Ok(())
}

fn list(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;
    output::print_banks_table(&vault.list_banks()?);
    Ok(())
}

fn reveal(cli: &Cli, id: u64) -> Result<()> {
    let vault = open_vault(cli)?;
    let password = prompt_password()?;

    let bank = vault.reveal_bank(id, &password)?;
    output::print_revealed_bank(&bank);
    Ok(())
}

fn delete(cli: &Cli, id: u64, force: bool) -> Result<()> {
    let vault = open_vault(cli)?;

    if !force && !confirm(&format!("Delete bank account {id}?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    vault.delete_bank(id)?;
    output::success(&format!("Deleted bank account {id}"));
    Ok(())
}
