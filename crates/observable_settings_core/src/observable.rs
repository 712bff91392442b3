//! Traits implemented by `#[derive(ObservableSettings)]`.

use crate::context::SettingsContext;
use crate::event::{Event, PropertyChangedEventArgs};

/// A type that announces property changes.
///
/// The derive implements this unless the type declares it already through
/// `#[observable_settings(implements(NotifyPropertyChanged))]`, in which case
/// the hand-written implementation is used by the generated setters.
pub trait NotifyPropertyChanged {
    /// Returns the event raised after any property changes.
    fn property_changed(&self) -> &Event<PropertyChangedEventArgs>;
}

/// A settings type whose properties are backed by a key-value store.
pub trait ObservableSettings: NotifyPropertyChanged {
    /// Returns the context holding the store and typed events.
    fn settings_context(&self) -> &SettingsContext;

    /// Returns one entry per generated property, in declaration order.
    fn setting_properties(&self) -> &'static [SettingProperty];

    /// Looks up a generated property by name.
    fn setting_property(&self, name: &str) -> Option<&'static SettingProperty> {
        self.setting_properties()
            .iter()
            .find(|property| property.name == name)
    }

    /// Removes every generated property's key from the store.
    ///
    /// Getters return their defaults afterwards. No events are raised.
    fn reset_settings(&self) {
        let store = self.settings_context().store();
        for property in self.setting_properties() {
            store.remove(property.key);
        }
    }
}

/// How a property's value is kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageStrategy {
    /// As its own [`SettingValue`](crate::SettingValue) variant.
    Native,
    /// As JSON text in a [`SettingValue::String`](crate::SettingValue::String).
    Json,
}

/// Static description of one generated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettingProperty {
    /// The property name, also the default storage key.
    pub name: &'static str,
    /// The key used in the store.
    pub key: &'static str,
    /// How the value is stored.
    pub strategy: StorageStrategy,
    /// Whether the field is an `Option`.
    pub nullable: bool,
    /// Whether a typed change event is raised.
    pub raises_event: bool,
}
