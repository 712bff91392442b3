//! The key-value store seen by generated accessors.
//!
//! - [`KeyValueStore`]: the flat `key -> SettingValue` namespace.
//! - [`MemoryStore`]: a process-local store, mainly for tests and defaults.
//!
//! A file-backed store lives in [`file_store`](crate::file_store).

use crate::value::SettingValue;
use hashbrown::HashMap;
use parking_lot::RwLock;

/// A flat namespace of settings keyed by string.
///
/// Stores take `&self` for writes; implementations provide their own
/// interior mutability so a store can sit behind an `Arc` shared by
/// several settings objects.
pub trait KeyValueStore: Send + Sync {
    /// Returns a copy of the value stored under `key`.
    fn try_get(&self, key: &str) -> Option<SettingValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: SettingValue);

    /// Removes `key`, returning the previous value.
    fn remove(&self, key: &str) -> Option<SettingValue>;

    /// Removes every key.
    fn clear(&self);

    /// Returns all keys currently present, in no particular order.
    fn keys(&self) -> Vec<String>;

    /// Returns whether `key` is present.
    fn contains_key(&self, key: &str) -> bool {
        self.try_get(key).is_some()
    }
}

/// An in-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, SettingValue>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn try_get(&self, key: &str) -> Option<SettingValue> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: SettingValue) {
        tracing::trace!(key, value_type = value.type_name(), "setting stored");
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<SettingValue> {
        self.entries.write().remove(key)
    }

    fn clear(&self) {
        self.entries.write().clear();
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}
