//! `MobileStore` — the identifier-keyed record set behind [`MobileStorage`].
//!
//! A store is either in-memory only ([`MobileStore::new`]) or backed by a
//! JSONL snapshot file ([`MobileStore::with_persistence`]). A backed store
//! loads the whole file once at construction and rewrites the whole file
//! after every successful mutation. The rewrite goes to a temporary file in
//! the same directory that is then renamed over the snapshot, so a failed
//! write leaves the previous snapshot intact. When the rewrite fails the
//! mutation is undone, so the in-memory set always matches the last
//! snapshot written.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::CoreError;

use super::jsonl::{export_records_to_jsonl, parse_jsonl_records};
use super::storage::MobileStorage;
use super::types::{Mobile, MobileStorageError};

/// File name of the snapshot inside a data directory.
pub const SNAPSHOT_FILE_NAME: &str = "mobile_storage.jsonl";

pub struct MobileStore {
    records: HashMap<String, Mobile>,
    source_path: Option<PathBuf>,
}

impl Default for MobileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileStore {
    /// An empty store that never touches the filesystem.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            source_path: None,
        }
    }

    /// Open a store mirrored to the snapshot file at `path`.
    ///
    /// A missing, unreadable or malformed snapshot is not an error: the
    /// store starts empty and the problem is logged. The file is only
    /// (re)created by the first successful mutation.
    pub fn with_persistence(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_snapshot(&path);
        Self {
            records,
            source_path: Some(path),
        }
    }

    /// Open a store mirrored to [`SNAPSHOT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_persistence(dir.join(SNAPSHOT_FILE_NAME))
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The current set in snapshot encoding, whether or not the store is
    /// file-backed.
    pub fn export_jsonl(&self) -> Result<String, CoreError> {
        export_records_to_jsonl(self.records.values())
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Rewrite the snapshot file from the current set. No-op for
    /// in-memory stores.
    fn flush(&self) -> Result<(), CoreError> {
        let Some(path) = &self.source_path else {
            return Ok(());
        };

        let content = self.export_jsonl()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        // Same directory as the target so the rename cannot cross filesystems.
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|err| CoreError::Io(err.error))?;
        Ok(())
    }
}

impl MobileStorage for MobileStore {
    fn get_all(&self) -> HashSet<Mobile> {
        self.records.values().cloned().collect()
    }

    fn find_by_imei(&self, imei: &str) -> Option<&Mobile> {
        self.records.get(imei)
    }

    fn save(&mut self, mobile: Mobile) -> Result<Mobile, MobileStorageError> {
        match self.records.entry(mobile.imei.clone()) {
            Entry::Occupied(_) => return Err(MobileStorageError::AlreadyExists(mobile.imei)),
            Entry::Vacant(slot) => {
                slot.insert(mobile.clone());
            }
        }

        if let Err(err) = self.flush() {
            self.records.remove(&mobile.imei);
            tracing::warn!(imei = %mobile.imei, error = %err, "snapshot write failed, save undone");
            return Err(MobileStorageError::WritingFailure(err));
        }

        tracing::debug!(imei = %mobile.imei, model = %mobile.model, "saved mobile");
        Ok(mobile)
    }

    fn delete(&mut self, mobile: &Mobile) -> Result<(), MobileStorageError> {
        let removed = self
            .records
            .remove(&mobile.imei)
            .ok_or_else(|| MobileStorageError::NothingToDelete(mobile.imei.clone()))?;

        if let Err(err) = self.flush() {
            tracing::warn!(imei = %removed.imei, error = %err, "snapshot write failed, delete undone");
            self.records.insert(removed.imei.clone(), removed);
            return Err(MobileStorageError::WritingFailure(err));
        }

        tracing::debug!(imei = %mobile.imei, remaining = self.records.len(), "deleted mobile");
        Ok(())
    }
}

fn load_snapshot(path: &Path) -> HashMap<String, Mobile> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no snapshot found, starting with an empty store");
            return HashMap::new();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read snapshot, starting with an empty store");
            return HashMap::new();
        }
    };

    match parse_jsonl_records(&content) {
        Ok(records) => {
            tracing::info!(path = %path.display(), count = records.len(), "loaded snapshot");
            records
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to decode snapshot, starting with an empty store");
            HashMap::new()
        }
    }
}
