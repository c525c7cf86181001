//! Local key-value storage for task snapshots.
//!
//! [`Storage`] is the persistence seam the task store writes through:
//! string keys, string values, one value per key, last write wins. Two
//! implementations are provided:
//!
//! - [`FileStorage`]: one file per key under a data directory
//! - [`MemoryStorage`]: in-process map, used by tests and as a fallback
//!   when no data directory can be resolved

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a key failed for a reason other than the key being absent.
    #[error("failed to read key {key}: {source}")]
    Read {
        /// Key that was being read.
        key: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing a key failed.
    #[error("failed to write key {key}: {source}")]
    Write {
        /// Key that was being written.
        key: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Synchronous key-value store holding one string value per key.
///
/// An absent key is not an error: `get` returns `Ok(None)`. Callers
/// treat a failed `set` as non-fatal; in-memory state stays
/// authoritative for the rest of the session.
pub trait Storage {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns [`StorageError::Read`] when the backend fails for any
    /// reason other than the key not existing.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError::Write`] when the value cannot be
    /// persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: each key maps to one file in the data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a store rooted at `dir`. The directory is created lazily
    /// on the first write, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store keeps its files in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Write {
            key: key.to_string(),
            source: e,
        })?;
        fs::write(self.key_path(key), value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            source: e,
        })
    }
}

/// In-memory storage used by tests and as a no-data-dir fallback.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls served so far.
    ///
    /// Lets tests assert that no-op operations skip the write-through.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
