use clap::Parser;
use ledgerlock::cli::commands;
use ledgerlock::cli::{Cli, Commands};

fn main() {
    ledgerlock::logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup => commands::setup::execute(&cli),
        Commands::Login => commands::login::execute(&cli),
        Commands::ChangePassword => commands::change_password::execute(&cli),
        Commands::Bank { ref action } => commands::bank::execute(&cli, action),
        Commands::Card { ref action } => commands::card::execute(&cli, action),
        Commands::Mask { ref value, visible } => commands::mask::execute(value, visible),
        Commands::Token { length } => commands::token::execute(length),
        Commands::Wipe { force } => commands::wipe::execute(&cli, force),
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        ledgerlock::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
