//! A [`KeyValueStore`] persisted to a JSON file.
//!
//! The file holds one object mapping keys to tagged [`SettingValue`]s:
//!
//! ```json
//! {
//!   "Volume": { "type": "F64", "value": 0.75 },
//!   "RecentFiles": { "type": "String", "value": "[\"a.txt\"]" }
//! }
//! ```
//!
//! Writes go through a sibling temporary file that is renamed over the
//! target, so a crash mid-save leaves the previous document intact.
//!
//! # Example
//!
//! ```no_run
//! use observable_settings_core::{FileStore, FileStoreConfig, KeyValueStore, SettingValue};
//!
//! let store = FileStore::open(
//!     FileStoreConfig::new("settings.json")
//!         .with_pretty(true)
//!         .with_autosave(true),
//! )?;
//! store.set("Volume", SettingValue::F64(0.75));
//! # Ok::<(), observable_settings_core::StoreError>(())
//! ```

use crate::error::StoreError;
use crate::store::KeyValueStore;
use crate::value::SettingValue;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration for a [`FileStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStoreConfig {
    /// Location of the settings document.
    path: PathBuf,
    /// Whether to indent the document.
    pretty: bool,
    /// Whether every write is flushed to disk immediately.
    autosave: bool,
}

impl FileStoreConfig {
    /// Creates a configuration for `path` with autosave on and compact output.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
            autosave: true,
        }
    }

    /// Writes an indented document.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Controls whether writes are saved immediately.
    ///
    /// With autosave off, call [`FileStore::save`] to persist.
    #[must_use]
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A [`KeyValueStore`] backed by a JSON document on disk.
#[derive(Debug)]
pub struct FileStore {
    config: FileStoreConfig,
    entries: RwLock<BTreeMap<String, SettingValue>>,
}

impl FileStore {
    /// Opens the store, loading the document if it exists.
    ///
    /// A missing file yields an empty store; it is created on first save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, or
    /// [`StoreError::Serialization`] if it is not a settings document.
    pub fn open(config: FileStoreConfig) -> Result<Self, StoreError> {
        let entries = match fs::read_to_string(&config.path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::io(&config.path, err)),
        };

        tracing::debug!(
            path = %config.path.display(),
            keys = entries.len(),
            "settings file opened"
        );

        Ok(Self {
            config,
            entries: RwLock::new(entries),
        })
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &FileStoreConfig {
        &self.config
    }

    /// Writes the current entries to disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the document cannot be encoded or written.
    pub fn save(&self) -> Result<(), StoreError> {
        let text = {
            let entries = self.entries.read();
            if self.config.pretty {
                serde_json::to_string_pretty(&*entries)?
            } else {
                serde_json::to_string(&*entries)?
            }
        };

        let path = &self.config.path;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }

        let staging = staging_path(path);
        fs::write(&staging, text).map_err(|err| StoreError::io(&staging, err))?;
        fs::rename(&staging, path).map_err(|err| StoreError::io(path, err))?;

        tracing::trace!(path = %path.display(), "settings file saved");
        Ok(())
    }

    fn persist(&self) {
        if !self.config.autosave {
            return;
        }
        if let Err(err) = self.save() {
            tracing::warn!(error = %err, "failed to persist settings; keeping them in memory");
        }
    }
}

/// Returns `<file name>.tmp` next to `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl KeyValueStore for FileStore {
    fn try_get(&self, key: &str) -> Option<SettingValue> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: SettingValue) {
        self.entries.write().insert(key.to_string(), value);
        self.persist();
    }

    fn remove(&self, key: &str) -> Option<SettingValue> {
        let previous = self.entries.write().remove(key);
        if previous.is_some() {
            self.persist();
        }
        previous
    }

    fn clear(&self) {
        self.entries.write().clear();
        self.persist();
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}
