//! In-process document store.
//!
//! Keeps the last saved document in memory.  Reads and writes can be
//! switched to fail so callers can exercise their storage-error paths.

use std::cell::{Cell, RefCell};

use super::document::Document;
use super::DocumentStore;
use crate::errors::{LedgerLockError, Result};

#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: RefCell<Option<Document>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `load` fail until switched back.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make every following `save` fail until switched back.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// A copy of the currently stored document.
    pub fn snapshot(&self) -> Option<Document> {
        self.doc.borrow().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<Document>> {
        if self.fail_reads.get() {
            return Err(LedgerLockError::StorageUnavailable("read refused".into()));
        }
        Ok(self.doc.borrow().clone())
    }

    fn save(&self, doc: &Document) -> Result<()> {
        if self.fail_writes.get() {
            return Err(LedgerLockError::StorageUnavailable("write refused".into()));
        }
        *self.doc.borrow_mut() = Some(doc.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
