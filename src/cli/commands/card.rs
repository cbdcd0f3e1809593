//! `ledgerlock card`: add, edit, list, reveal and delete cards.

use crate::cli::output;
use crate::cli::{confirm, open_vault, prompt_password, prompt_secret_value, CardAction, CardArgs, Cli};
use crate::errors::Result;
use crate::vault::{CardInput, CardType, SensitiveField};

/// Execute a `card` subcommand.
pub fn execute(cli: &Cli, action: &CardAction) -> Result<()> {
    match action {
        CardAction::Add(args) => add(cli, args),
        CardAction::Edit { id, args } => edit(cli, *id, args),
        CardAction::List => list(cli),
        CardAction::Reveal { id } => reveal(cli, *id),
        CardAction::Delete { id, force } => delete(cli, *id, *force),
    }
}

fn input_from_args(args: &CardArgs) -> Result<CardInput> {
    if args.card_type == CardType::Debit
        && (args.billing_cycle.is_some() || args.credit_limit.is_some() || args.current_due.is_some())
    {
        output::warning("Billing cycle, credit limit and due amount are ignored for debit cards.");
    }

    let card_number = prompt_secret_value(args.card_number.as_deref(), "card number")?;
    Ok(CardInput {
        bank_name: args.bank_name.clone(),
        card_type: args.card_type,
        card_number: card_number.to_string(),
        expiry_date: args.expiry.clone(),
        billing_cycle: args.billing_cycle.clone(),
        credit_limit: args.credit_limit,
        current_due: args.current_due,
        comments: args.comments.clone(),
    })
}

fn add(cli: &Cli, args: &CardArgs) -> Result<()> {
    let vault = open_vault(cli)?;
    let input = input_from_args(args)?;
    let preview = SensitiveField::CardNumber.mask(input.card_number.trim());
    let password = prompt_password()?;

    let id = vault.add_card(&password, input)?;

    output::success(&format!(
        "Added {} card {id} ({} {preview})",
        args.card_type,
        args.bank_name.trim()
    ));
    Ok(())
}

fn edit(cli: &Cli, id: u64, args: &CardArgs) -> Result<()> {
    let vault = open_vault(cli)?;
    let input = input_from_args(args)?;
    let password = prompt_password()?;

    vault.update_card(id, &password, input)?;

    output::success(&format!("Updated card {id}"));
    Ok(())
}

fn list(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;
    output::print_cards_table(&vault.list_cards()?);
    Ok(())
}

fn reveal(cli: &Cli, id: u64) -> Result<()> {
    let vault = open_vault(cli)?;
    let password = prompt_password()?;

    let card = vault.reveal_card(id, &password)?;
    output::print_revealed_card(&card);
    Ok(())
}

fn delete(cli: &Cli, id: u64, force: bool) -> Result<()> {
    let vault = open_vault(cli)?;

    if !force && !confirm(&format!("Delete card {id}?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    vault.delete_card(id)?;
    output::success(&format!("Deleted card {id}"));
    Ok(())
}
