//! In-memory store, for embedding and tests.
//! Holds the encoded bytes so loads exercise the same decoding as files.

use crate::errors::{StorageError, StorageResult};
use crate::models::LedgerDocument;
use crate::store::{DocumentStore, decode, encode};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct MemoryStore {
    content: RefCell<Option<Vec<u8>>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(json: &str) -> Self {
        let store = Self::new();
        store.content.replace(Some(json.as_bytes().to_vec()));
        store
    }

    /// Last saved document text.
    pub fn content(&self) -> Option<String> {
        self.content
            .borrow()
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make every following `save` fail with an I/O error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    fn location() -> PathBuf {
        PathBuf::from("<memory>")
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StorageResult<Option<LedgerDocument>> {
        match self.content.borrow().as_deref() {
            None => Ok(None),
            Some(bytes) => decode(bytes)
                .map(Some)
                .map_err(|source| StorageError::Malformed {
                    path: Self::location(),
                    source,
                }),
        }
    }

    fn save(&self, doc: &LedgerDocument) -> StorageResult<()> {
        if self.fail_saves.get() {
            return Err(StorageError::Io {
                path: Self::location(),
                source: io::Error::other("simulated write failure"),
            });
        }

        let bytes = encode(doc).map_err(|source| StorageError::Malformed {
            path: Self::location(),
            source,
        })?;
        self.content.replace(Some(bytes));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
