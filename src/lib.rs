//! Observable, strongly-typed accessors for persisted key-value settings.
//!
//! Annotate the backing fields of a settings struct and derive
//! [`ObservableSettings`]: every field gets a getter that reads the store, a
//! setter that writes it and raises change notifications, and a typed
//! per-property change event.
//!
//! ```
//! use observable_settings::prelude::*;
//!
//! #[derive(ObservableSettings)]
//! struct WindowSettings {
//!     #[observable_setting]
//!     _bounds: Rect,
//!
//!     #[observable_setting(key = "window.pinned")]
//!     _pinned: bool,
//!
//!     context: SettingsContext,
//! }
//!
//! let settings = WindowSettings {
//!     _bounds: Rect::new(0.0, 0.0, 800.0, 600.0),
//!     _pinned: false,
//!     context: SettingsContext::in_memory(),
//! };
//!
//! settings.property_changed().subscribe(|args| {
//!     assert_eq!(args.property_name, "Pinned");
//! });
//! settings.set_pinned(true);
//! assert!(settings.pinned());
//! ```
//!
//! The runtime lives in `observable_settings_core`; code generation for
//! whole source trees is provided by the `settings-gen` binary.

pub use observable_settings_core::*;

#[doc(hidden)]
pub use observable_settings_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use observable_settings_core::prelude::*;
}
