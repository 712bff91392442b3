//! Per-instance state used by generated accessors.

use crate::event::{Event, PropertyChangedEventArgs, SettingValueChanged};
use crate::store::{KeyValueStore, MemoryStore};
use core::any::{Any, TypeId};
use core::fmt;
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;

type ErasedEvent = Arc<dyn Any + Send + Sync>;

/// The store handle and event state behind one settings object.
///
/// A type deriving [`ObservableSettings`](crate::ObservableSettings) holds one
/// of these as a field. Several settings objects may share the same store;
/// events are always per context.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use observable_settings_core::{KeyValueStore, MemoryStore, SettingsContext};
///
/// let store = Arc::new(MemoryStore::new());
/// let context = SettingsContext::new(store.clone());
/// assert!(!context.store().contains_key("Volume"));
/// ```
pub struct SettingsContext {
    store: Arc<dyn KeyValueStore>,
    property_changed: Event<PropertyChangedEventArgs>,
    value_changed: RwLock<HashMap<(&'static str, TypeId), ErasedEvent>>,
}

impl SettingsContext {
    /// Creates a context over a shared store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            property_changed: Event::new(),
            value_changed: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a context that owns `store`.
    #[must_use]
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self::new(Arc::new(store))
    }

    /// Creates a context over a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Returns the store.
    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Returns a shared handle to the store.
    #[must_use]
    pub fn shared_store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    /// Returns the generic property-changed event.
    #[must_use]
    pub fn property_changed(&self) -> &Event<PropertyChangedEventArgs> {
        &self.property_changed
    }

    /// Returns the typed change event of `property`, creating it on first use.
    pub fn value_changed<T: 'static>(
        &self,
        property: &'static str,
    ) -> Arc<Event<SettingValueChanged<T>>> {
        let key = (property, TypeId::of::<T>());

        if let Some(erased) = self.value_changed.read().get(&key)
            && let Ok(event) = Arc::clone(erased).downcast::<Event<SettingValueChanged<T>>>()
        {
            return event;
        }

        let mut events = self.value_changed.write();
        let erased = events
            .entry(key)
            .or_insert_with(|| Arc::new(Event::<SettingValueChanged<T>>::new()) as ErasedEvent);

        match Arc::clone(erased).downcast::<Event<SettingValueChanged<T>>>() {
            Ok(event) => event,
            Err(_) => {
                let event = Arc::new(Event::<SettingValueChanged<T>>::new());
                *erased = Arc::clone(&event) as ErasedEvent;
                event
            }
        }
    }
}

impl Default for SettingsContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for SettingsContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsContext")
            .field("property_changed", &self.property_changed)
            .field("typed_events", &self.value_changed.read().len())
            .finish_non_exhaustive()
    }
}
