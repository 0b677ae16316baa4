// SPDX-License-Identifier: MPL-2.0
//! Key-value stores backing persisted preferences.
//!
//! # Path Resolution
//!
//! The file store location can be customized for testing or portable deployments:
//! 1. Use [`FileStore::open`] with an explicit path
//! 2. Set `PLAYER_OVERLAY_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::error::{Error, Result};
use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store file name within the data directory.
const STORE_FILE: &str = "preferences.toml";

/// Persistent string key-value storage.
///
/// No transactions. Failures are reported but never fatal to the player.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, for hosts without persistence and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like storage disabled by the
    /// platform's privacy mode.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            values: BTreeMap::new(),
            read_only: true,
        }
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Storage(format!("store is read-only, cannot set {key}")));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a flat TOML table of strings, written through on
/// every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). If reading fails, the
    /// store starts empty and the warning names a notification message key.
    pub fn open_default() -> (Option<Self>, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, or the default data directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Option<Self>, Option<String>) {
        match paths::get_data_dir_with_override(base_dir) {
            Some(mut path) => {
                path.push(STORE_FILE);
                let (store, warning) = Self::open(&path);
                (Some(store), warning)
            }
            None => (None, Some("notification-storage-path-error".to_string())),
        }
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> (Self, Option<String>) {
        let empty = |warning: &str| {
            (
                Self {
                    path: path.to_path_buf(),
                    values: BTreeMap::new(),
                },
                Some(warning.to_string()),
            )
        };

        if !path.exists() {
            return (
                Self {
                    path: path.to_path_buf(),
                    values: BTreeMap::new(),
                },
                None,
            );
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Failed to read preferences {}: {}", path.display(), err);
                return empty("notification-storage-read-error");
            }
        };
        match toml::from_str::<BTreeMap<String, String>>(&content) {
            Ok(values) => (
                Self {
                    path: path.to_path_buf(),
                    values,
                },
                None,
            ),
            Err(err) => {
                log::warn!("Ignoring malformed preferences {}: {}", path.display(), err);
                empty("notification-storage-parse-error")
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        let result = self.flush();
        if result.is_err() {
            // Keep memory consistent with what is on disk.
            match previous {
                Some(previous) => self.values.insert(key.to_string(), previous),
                None => self.values.remove(key),
            };
        }
        result
    }
}
