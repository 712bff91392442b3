//! Runtime support for observable settings.
//!
//! `observable_settings_core` provides everything code generated by
//! `#[derive(ObservableSettings)]` calls into:
//!
//! - [`value`] - The closed set of natively storable values
//! - [`store`] - The key-value store trait and an in-memory store
//! - [`file_store`] - A store persisted to a JSON file
//! - [`access`] - Native and JSON read/write helpers
//! - [`event`] - Change events
//! - [`context`] - Per-instance store handle and event state
//! - [`observable`] - Traits implemented by the derive
//!
//! # Example
//!
//! ```
//! use observable_settings_core::{ObservableSettings, SettingsContext};
//!
//! #[derive(ObservableSettings)]
//! struct AudioSettings {
//!     #[observable_setting]
//!     _volume: f64,
//!
//!     #[observable_setting("Output", false)]
//!     _device: String,
//!
//!     context: SettingsContext,
//! }
//!
//! let settings = AudioSettings {
//!     _volume: 0.75,
//!     _device: "default".to_string(),
//!     context: SettingsContext::in_memory(),
//! };
//!
//! assert_eq!(settings.volume(), 0.75);
//! settings.volume_changed().subscribe(|change| {
//!     assert_eq!((change.old_value, change.new_value), (0.75, 0.5));
//! });
//! settings.set_volume(0.5);
//! assert_eq!(settings.volume(), 0.5);
//!
//! settings.set_device("speakers".to_string());
//! assert!(settings.settings_context().store().contains_key("Output"));
//! ```

// Self-reference so derive output using `observable_settings_core::` paths
// compiles inside this crate's own tests and doctests.
extern crate self as observable_settings_core;

/// Native and JSON read/write helpers.
pub mod access;

/// Per-instance store handle and event state.
pub mod context;

/// Store errors.
pub mod error;

/// Change events.
pub mod event;

/// A store persisted to a JSON file.
pub mod file_store;

mod float;

/// Small geometry values.
pub mod geometry;

/// Traits implemented by the derive.
pub mod observable;

/// The key-value store trait and an in-memory store.
pub mod store;

/// Natively storable values.
pub mod value;

pub use context::SettingsContext;
pub use error::StoreError;
pub use event::{Event, PropertyChangedEventArgs, SettingValueChanged, SubscriptionId};
pub use file_store::{FileStore, FileStoreConfig};
pub use geometry::{Point, Rect, Size};
pub use observable::{NotifyPropertyChanged, ObservableSettings, SettingProperty, StorageStrategy};
pub use store::{KeyValueStore, MemoryStore};
pub use value::{NativeSetting, SettingValue};

/// Re-export the `#[derive(ObservableSettings)]` and
/// `#[derive(SettingsSource)]` macros.
pub use observable_settings_macros::{ObservableSettings, SettingsSource};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::context::SettingsContext;
    pub use crate::event::{Event, PropertyChangedEventArgs, SettingValueChanged};
    pub use crate::file_store::{FileStore, FileStoreConfig};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::{NotifyPropertyChanged, ObservableSettings, SettingsSource};
    pub use crate::store::{KeyValueStore, MemoryStore};
    pub use crate::value::SettingValue;
}
