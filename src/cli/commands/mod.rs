pub mod bank;
pub mod card;
pub mod change_password;
pub mod completions;
pub mod login;
pub mod mask;
pub mod setup;
pub mod token;
pub mod wipe;
