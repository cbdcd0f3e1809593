//! Persistence boundary: load and save the whole ledger document.
//!
//! This module provides:
//! - `Document` and `CredentialRecord` types (`document`)
//! - `JsonFileStore`, the on-disk store with atomic writes (`file`)
//! - `MemoryStore`, an in-process store for tests (`memory`)

pub mod document;
pub mod file;
pub mod memory;

pub use document::{CredentialRecord, Document, CURRENT_VERSION};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::Result;

/// Opaque get/set of the ledger document.
///
/// `load` returns `Ok(None)` when no document exists yet.  `save`
/// replaces the stored document as one unit.
pub trait DocumentStore {
    fn load(&self) -> Result<Option<Document>>;
    fn save(&self, doc: &Document) -> Result<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn load(&self) -> Result<Option<Document>> {
        (**self).load()
    }

    fn save(&self, doc: &Document) -> Result<()> {
        (**self).save(doc)
    }
}
