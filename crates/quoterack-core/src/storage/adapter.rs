//! Key/value storage adapter
//!
//! Wraps the two persistence surfaces the store needs behind string-keyed
//! get/set operations:
//!
//! - `DurableStore`: one file per key under the data directory, written
//!   atomically (write to temp file, then rename). Survives across runs.
//! - `SessionStore`: in-process map, dropped when the process exits.
//!
//! Keys:
//! - `quotes` - JSON array of quote records (durable)
//! - `selectedCategory` - plain string (durable)
//! - `lastViewedQuote` - JSON quote record (session)

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;

use super::error::{StorageError, StorageResult};

/// Durable storage key for the quote list
pub const QUOTES_KEY: &str = "quotes";
/// Durable storage key for the selected category filter
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";
/// Session storage key for the last randomly viewed quote
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// File-backed durable key/value store
///
/// Each key is stored as `<data_dir>/<key>.json`. Values are whole-document
/// snapshots, overwritten on every set, never diffed.
#[derive(Debug)]
pub struct DurableStore {
    dir: PathBuf,
}

impl DurableStore {
    /// Create a durable store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path for a key's backing file
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the value for a key
    ///
    /// Returns `None` if the key has never been set.
    pub fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::ReadError { path, source: e })
    }

    /// Write the value for a key, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        atomic_write(&self.key_path(key), value.as_bytes())
    }
}

/// In-process session store
///
/// Values live only as long as the owning process; a new run starts empty.
#[derive(Debug, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }
}

/// Combined storage adapter over the durable and session stores
#[derive(Debug)]
pub struct StorageAdapter {
    durable: DurableStore,
    session: SessionStore,
}

impl StorageAdapter {
    /// Create an adapter with durable storage under the configured data dir
    pub fn new(config: &Config) -> Self {
        Self {
            durable: DurableStore::new(&config.data_dir),
            session: SessionStore::new(),
        }
    }

    /// Read a durable value
    pub fn get_durable(&self, key: &str) -> StorageResult<Option<String>> {
        self.durable.get(key)
    }

    /// Write a durable value
    pub fn set_durable(&self, key: &str, value: &str) -> StorageResult<()> {
        self.durable.set(key, value)
    }

    /// Read a session value
    pub fn get_session(&self, key: &str) -> Option<&str> {
        self.session.get(key)
    }

    /// Write a session value
    pub fn set_session(&mut self, key: &str, value: impl Into<String>) {
        self.session.set(key, value);
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
