//! Persistence of the ledger document.
//!
//! The ledger only needs "read the whole document" and "replace the whole
//! document", so that is all [`DocumentStore`] offers.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::StorageResult;
use crate::models::LedgerDocument;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub trait DocumentStore {
    /// `Ok(None)` when no document exists yet.
    fn load(&self) -> StorageResult<Option<LedgerDocument>>;

    /// Replace the persisted document with `doc`.
    fn save(&self, doc: &LedgerDocument) -> StorageResult<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn load(&self) -> StorageResult<Option<LedgerDocument>> {
        (**self).load()
    }

    fn save(&self, doc: &LedgerDocument) -> StorageResult<()> {
        (**self).save(doc)
    }
}

/// Document encoding shared by every store: JSON with 4-space indentation.
pub fn encode(doc: &LedgerDocument) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    doc.serialize(&mut ser)?;
    Ok(buf)
}

pub fn decode(bytes: &[u8]) -> Result<LedgerDocument, serde_json::Error> {
    serde_json::from_slice(bytes)
}
