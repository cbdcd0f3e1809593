//! JSON file store with atomic writes.

use std::fs;
use std::path::{Path, PathBuf};

use super::document::Document;
use super::DocumentStore;
use crate::errors::{LedgerLockError, Result};

/// Stores the document as pretty-printed JSON at `path`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<Document>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let doc = serde_json::from_str(&contents).map_err(|e| LedgerLockError::InvalidDocument {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(doc))
    }

    /// Write the document **atomically**.
    ///
    /// 1. Serialize to JSON.
    /// 2. Write to a temp file in the same directory.
    /// 3. Rename the temp file over the target path.
    ///
    /// Readers never see a half-written file.
    fn save(&self, doc: &Document) -> Result<()> {
        let json = serde_json::to_vec_pretty(doc)
            .map_err(|e| LedgerLockError::SerializationError(format!("document: {e}")))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &json)?;

        // Owner-only before the file becomes visible under its real name.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
