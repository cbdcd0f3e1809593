use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::auth::{PasswordPolicy, DEFAULT_MIN_PASSWORD_LEN};
use crate::crypto::Argon2Params;
use crate::errors::{LedgerLockError, Result};

/// Project-level configuration, loaded from `.ledgerlock.toml`.
///
/// Every field has a sensible default so LedgerLock works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) holding the document.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// File name of the ledger document inside `data_dir`.
    #[serde(default = "default_document_name")]
    pub document_name: String,

    /// Minimum master-password length.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Argon2 memory cost in KiB (default: 64 MB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count (default: 3).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree (default: 4).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_data_dir() -> String {
    ".ledgerlock".to_string()
}

fn default_document_name() -> String {
    "ledger.json".to_string()
}

fn default_min_password_length() -> usize {
    DEFAULT_MIN_PASSWORD_LEN
}

fn default_argon2_memory_kib() -> u32 {
    65_536 // 64 MB
}

fn default_argon2_iterations() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            document_name: default_document_name(),
            min_password_length: default_min_password_length(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    pub const FILE_NAME: &'static str = ".ledgerlock.toml";

    /// Load settings from `<project_dir>/.ledgerlock.toml`.
    ///
    /// If the file does not exist, defaults are returned.  If it exists
    /// but cannot be parsed, or its Argon2 values are below the safety
    /// floor, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            LedgerLockError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.argon2_params().validate().map_err(|e| {
            LedgerLockError::ConfigError(format!("{}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Full path to the ledger document.
    ///
    /// Example: `project_dir/.ledgerlock/ledger.json`
    pub fn document_path(&self, project_dir: &Path, data_dir: Option<&str>) -> PathBuf {
        project_dir
            .join(data_dir.unwrap_or(&self.data_dir))
            .join(&self.document_name)
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> Argon2Params {
        Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_password_length,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.data_dir, ".ledgerlock");
        assert_eq!(s.document_name, "ledger.json");
        assert_eq!(s.min_password_length, 8);
        assert_eq!(s.argon2_params(), Argon2Params::default());
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.data_dir, ".ledgerlock");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
data_dir = "finance"
document_name = "household.json"
min_password_length = 12
argon2_memory_kib = 131072
argon2_iterations = 5
argon2_parallelism = 8
"#;
        fs::write(tmp.path().join(Settings::FILE_NAME), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.data_dir, "finance");
        assert_eq!(settings.document_name, "household.json");
        assert_eq!(settings.password_policy().min_length, 12);
        assert_eq!(settings.argon2_memory_kib, 131_072);
        assert_eq!(settings.argon2_iterations, 5);
        assert_eq!(settings.argon2_parallelism, 8);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(Settings::FILE_NAME), "min_password_length = 10\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.min_password_length, 10);
        assert_eq!(settings.data_dir, ".ledgerlock");
        assert_eq!(settings.argon2_iterations, 3);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(Settings::FILE_NAME), "not valid {{toml").unwrap();
        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn load_rejects_weak_argon2_settings() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(Settings::FILE_NAME), "argon2_memory_kib = 1024\n").unwrap();
        assert!(matches!(
            Settings::load(tmp.path()),
            Err(LedgerLockError::ConfigError(_))
        ));
    }

    #[test]
    fn document_path_builds_correct_path() {
        let s = Settings::default();
        let project = Path::new("/home/user/finances");
        assert_eq!(
            s.document_path(project, None),
            PathBuf::from("/home/user/finances/.ledgerlock/ledger.json")
        );
        assert_eq!(
            s.document_path(project, Some("elsewhere")),
            PathBuf::from("/home/user/finances/elsewhere/ledger.json")
        );
    }
}
