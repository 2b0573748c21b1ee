//! JSON file store.
//!
//! Saves go to a sibling `*.tmp` file which is then renamed over the target,
//! so readers see either the old or the new document, never half of one.
//! There is no locking: another process writing the same file between a load
//! and a save is not supported and its changes will be overwritten.

use crate::errors::{StorageError, StorageResult};
use crate::models::LedgerDocument;
use crate::store::{DocumentStore, decode, encode};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> StorageResult<Option<LedgerDocument>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };

        decode(&bytes)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, doc: &LedgerDocument) -> StorageResult<()> {
        let bytes = encode(doc).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let tmp = self.tmp_path();
        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            fs::remove_file(&tmp).ok();
            return Err(self.io_err(e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OtEntry;
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 6)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("ot.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_returns_same_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("ot.json"));

        let mut doc = LedgerDocument::bootstrap(now());
        doc.entries.push(OtEntry::new(
            NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
            42,
            Some("deploy"),
            None,
        ));
        doc.total = 1;

        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), Some(doc));
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn document_is_indented_with_four_spaces() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("ot.json"));
        store.save(&LedgerDocument::bootstrap(now())).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n    \"entries\": [],\n    \"total\": 0,"));
        assert!(text.contains("\"last_updated\": \"2025-05-06 18:30:00\""));
    }

    #[test]
    fn garbage_is_reported_as_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ot.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        // a directory cannot be read as a document
        let err = JsonFileStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
