//! Configuration loaded from `.ledgerlock.toml`.

pub mod settings;

pub use settings::Settings;
