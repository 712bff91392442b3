//! Procedural macros for observable settings.
//!
//! This crate provides `#[derive(ObservableSettings)]`, and
//! `#[derive(SettingsSource)]` for structs whose accessors are written by
//! the `settings-gen` file generator instead. The expansion logic lives in
//! `observable_settings_codegen` so the file generator can share it.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro generating store-backed accessors with change notification.
///
/// Every field marked `#[observable_setting]` becomes a property:
///
/// - a getter named after the field without leading underscores, returning
///   the stored value or, if absent, the field's own value;
/// - a setter `set_<name>` that writes the store and raises
///   `NotifyPropertyChanged` and then the typed change event when the value
///   differs;
/// - a typed event accessor `<name>_changed`, unless `raise_event = false`.
///
/// The struct needs a `SettingsContext` field, found by type or marked with
/// `#[observable_settings(context)]`.
///
/// # Attributes
///
/// - `#[observable_setting]`: store under the property name.
/// - `#[observable_setting("Key")]` or `#[observable_setting = "Key"]`:
///   store under `Key`.
/// - `#[observable_setting("Key", false)]` or
///   `#[observable_setting(key = "Key", raise_event = false)]`: no typed event.
/// - `#[observable_setting(json)]`, `#[observable_setting(native)]` or
///   `#[observable_setting(strategy = "json")]`: choose the storage strategy
///   instead of deriving it from the field type. Only full paths such as
///   `std::time::Duration` or `observable_settings::Rect` are recognized as
///   native, since a derive cannot see `use` items; primitives and `String`
///   are recognized by name.
/// - `#[observable_settings(implements(NotifyPropertyChanged))]` on the struct:
///   use a hand-written `NotifyPropertyChanged` implementation.
///
/// # Example
///
/// ```ignore
/// use observable_settings::prelude::*;
///
/// #[derive(ObservableSettings)]
/// struct AudioSettings {
///     /// Output volume between 0 and 1.
///     #[observable_setting]
///     _volume: f64,
///
///     #[observable_setting(key = "audio.device", raise_event = false)]
///     _device: Option<String>,
///
///     context: SettingsContext,
/// }
/// ```
#[proc_macro_derive(ObservableSettings, attributes(observable_setting, observable_settings))]
pub fn derive_observable_settings(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    observable_settings_codegen::expand_derive(&input).into()
}

/// Registers the `#[observable_setting]` and `#[observable_settings]`
/// attributes on a struct and expands to nothing.
///
/// Use it on structs whose accessors come from a unit generated by
/// `settings-gen`, `include!`d beside the struct:
///
/// ```ignore
/// use observable_settings::prelude::*;
///
/// #[derive(SettingsSource)]
/// pub struct AppSettings {
///     #[observable_setting]
///     _volume: f64,
///     context: SettingsContext,
/// }
///
/// include!(concat!(env!("OUT_DIR"), "/app.AppSettings_observable_settings.g.rs"));
/// ```
#[proc_macro_derive(SettingsSource, attributes(observable_setting, observable_settings))]
pub fn derive_settings_source(_input: TokenStream) -> TokenStream {
    TokenStream::new()
}
