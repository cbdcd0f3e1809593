//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{MaskedBank, MaskedCard, RevealedBank, RevealedCard};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn amount(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

/// Print bank accounts with their sensitive fields masked.
pub fn print_banks_table(banks: &[MaskedBank]) {
    if banks.is_empty() {
        info("No bank accounts yet.");
        tip("Run `ledgerlock bank add --bank-name <NAME> --holder <NAME>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID",
        "Bank",
        "Holder",
        "Account No.",
        "IFSC",
        "UPI",
        "Phone",
        "Net-banking ID",
        "Added",
    ]);

    for b in banks {
        table.add_row(vec![
            b.id.to_string(),
            b.bank_name.clone(),
            b.account_holder.clone(),
            b.account_number.clone(),
            or_dash(b.ifsc_code.as_deref()),
            or_dash(b.upi_id.as_deref()),
            or_dash(b.registered_phone.as_deref()),
            or_dash(b.netbanking_id.as_deref()),
            b.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print cards with their numbers masked.
pub fn print_cards_table(cards: &[MaskedCard]) {
    if cards.is_empty() {
        info("No cards yet.");
        tip("Run `ledgerlock card add --bank-name <NAME>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID",
        "Bank",
        "Type",
        "Card No.",
        "Expiry",
        "Billing Cycle",
        "Limit",
        "Due",
    ]);

    for c in cards {
        table.add_row(vec![
            c.id.to_string(),
            c.bank_name.clone(),
            c.card_type.to_string(),
            c.card_number.clone(),
            or_dash(c.expiry_date.as_deref()),
            or_dash(c.billing_cycle.as_deref()),
            amount(c.credit_limit),
            amount(c.current_due),
        ]);
    }

    println!("{table}");
}

/// Print one bank account in full.
pub fn print_revealed_bank(bank: &RevealedBank) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Bank".to_string(), bank.bank_name.clone()]);
    table.add_row(vec!["Holder".to_string(), bank.account_holder.clone()]);
    table.add_row(vec![
        "Account No.".to_string(),
        bank.account_number.to_string(),
    ]);
    table.add_row(vec!["IFSC".to_string(), or_dash(bank.ifsc_code.as_deref())]);
    table.add_row(vec!["UPI".to_string(), or_dash(bank.upi_id.as_deref())]);
    table.add_row(vec![
        "Phone".to_string(),
        or_dash(bank.registered_phone.as_ref().map(|p| p.as_str())),
    ]);
    table.add_row(vec![
        "Net-banking ID".to_string(),
        or_dash(bank.netbanking_id.as_ref().map(|n| n.as_str())),
    ]);
    table.add_row(vec!["Notes".to_string(), or_dash(bank.comments.as_deref())]);
    table.add_row(vec![
        "Added".to_string(),
        bank.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]);

    println!("{table}");
}

/// Print one card in full.
pub fn print_revealed_card(card: &RevealedCard) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Bank".to_string(), card.bank_name.clone()]);
    table.add_row(vec!["Type".to_string(), card.card_type.to_string()]);
    table.add_row(vec!["Card No.".to_string(), card.card_number.to_string()]);
    table.add_row(vec![
        "Expiry".to_string(),
        or_dash(card.expiry_date.as_deref()),
    ]);
    table.add_row(vec![
        "Billing Cycle".to_string(),
        or_dash(card.billing_cycle.as_deref()),
    ]);
    table.add_row(vec!["Limit".to_string(), amount(card.credit_limit)]);
    table.add_row(vec!["Due".to_string(), amount(card.current_due)]);
    table.add_row(vec!["Notes".to_string(), or_dash(card.comments.as_deref())]);
    table.add_row(vec![
        "Added".to_string(),
        card.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]);

    println!("{table}");
}
