//! Typed reads and writes against a [`KeyValueStore`].
//!
//! Generated accessors call these helpers; they can also be used directly.
//! Two strategies exist:
//!
//! - **native**: the value is stored as its own [`SettingValue`] variant.
//!   A stored value of a different variant reads as absent.
//! - **JSON**: the value is serialized to text and stored as a
//!   [`SettingValue::String`]. Unparseable text reads as absent.
//!
//! Reads never fail: anything that cannot be turned into the requested type
//! falls back to the caller's default.
//!
//! # Example
//!
//! ```
//! use observable_settings_core::{MemoryStore, access};
//!
//! let store = MemoryStore::new();
//! assert_eq!(access::get_native(&store, "Volume", &0.75), 0.75);
//!
//! access::set_native(&store, "Volume", &0.5);
//! assert_eq!(access::get_native(&store, "Volume", &0.75), 0.5);
//!
//! access::set_json(&store, "Recent", &vec![1, 2, 3]);
//! assert_eq!(access::get_json(&store, "Recent", &Vec::<i32>::new()), vec![1, 2, 3]);
//! ```

use crate::store::KeyValueStore;
use crate::value::{NativeSetting, SettingValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads a native setting, or `default` if it is absent or of another type.
pub fn get_native<T: NativeSetting>(store: &dyn KeyValueStore, key: &str, default: &T) -> T {
    read_native(store, key).unwrap_or_else(|| default.clone())
}

/// Reads an optional native setting, or `default` if it is absent or of
/// another type.
pub fn get_native_nullable<T: NativeSetting>(
    store: &dyn KeyValueStore,
    key: &str,
    default: &Option<T>,
) -> Option<T> {
    read_native(store, key).or_else(|| default.clone())
}

/// Stores a native setting.
pub fn set_native<T: NativeSetting>(store: &dyn KeyValueStore, key: &str, value: &T) {
    store.set(key, value.to_setting_value());
}

/// Stores an optional native setting; `None` removes the key.
pub fn set_native_nullable<T: NativeSetting>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &Option<T>,
) {
    match value {
        Some(value) => store.set(key, value.to_setting_value()),
        None => {
            store.remove(key);
        }
    }
}

/// Reads a JSON setting, or `default` if it is absent, not text, unparseable
/// or `null`.
pub fn get_json<T: DeserializeOwned + Clone>(
    store: &dyn KeyValueStore,
    key: &str,
    default: &T,
) -> T {
    read_json(store, key).unwrap_or_else(|| default.clone())
}

/// Reads an optional JSON setting, or `default` if it is absent, not text,
/// unparseable or `null`.
pub fn get_json_nullable<T: DeserializeOwned + Clone>(
    store: &dyn KeyValueStore,
    key: &str,
    default: &Option<T>,
) -> Option<T> {
    read_json(store, key).or_else(|| default.clone())
}

/// Serializes `value` to JSON text and stores it. `None` is stored as `"null"`.
///
/// If serialization fails the store is left untouched.
pub fn set_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(text) => store.set(key, SettingValue::String(text)),
        Err(err) => {
            tracing::warn!(key, error = %err, "setting could not be serialized; not stored");
        }
    }
}

/// Returns whether assigning `new` over `old` leaves a native setting
/// unchanged. NaN equals NaN.
pub fn native_unchanged<T: NativeSetting>(old: &T, new: &T) -> bool {
    old.same_setting(new)
}

/// Returns whether assigning `new` over `old` leaves an optional native
/// setting unchanged.
pub fn native_nullable_unchanged<T: NativeSetting>(old: &Option<T>, new: &Option<T>) -> bool {
    match (old, new) {
        (Some(old), Some(new)) => old.same_setting(new),
        (None, None) => true,
        _ => false,
    }
}

/// Returns whether assigning `new` over `old` leaves a JSON setting
/// unchanged.
pub fn json_unchanged<T: PartialEq + ?Sized>(old: &T, new: &T) -> bool {
    old == new
}

fn read_native<T: NativeSetting>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let stored = store.try_get(key)?;
    let value = T::from_setting_value(&stored);
    if value.is_none() {
        tracing::trace!(
            key,
            stored_type = stored.type_name(),
            "stored setting has a different type; using default"
        );
    }
    value
}

fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let stored = store.try_get(key)?;
    let Some(text) = stored.as_str() else {
        tracing::trace!(
            key,
            stored_type = stored.type_name(),
            "stored setting is not JSON text; using default"
        );
        return None;
    };

    let parsed = serde_json::from_str::<serde_json::Value>(text)
        .and_then(|json| {
            if json.is_null() {
                Ok(None)
            } else {
                serde_json::from_value(json).map(Some)
            }
        });

    match parsed {
        Ok(value) => value,
        Err(err) => {
            tracing::trace!(key, error = %err, "stored JSON setting is invalid; using default");
            None
        }
    }
}
