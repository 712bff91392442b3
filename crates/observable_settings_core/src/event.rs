//! Change events raised by generated setters.
//!
//! - [`Event`]: a list of handlers for one kind of event arguments.
//! - [`PropertyChangedEventArgs`]: the generic "this property changed"
//!   notification shared by every property of a settings type.
//! - [`SettingValueChanged`]: the typed per-property event carrying the old
//!   and new value.
//!
//! # Example
//!
//! ```
//! use observable_settings_core::{Event, SettingValueChanged};
//!
//! let event = Event::<SettingValueChanged<f64>>::new();
//! let id = event.subscribe(|change| {
//!     assert_eq!(change.old_value, 0.75);
//!     assert_eq!(change.new_value, 0.5);
//! });
//!
//! event.raise(&SettingValueChanged::new(0.75, 0.5));
//! assert!(event.unsubscribe(id));
//! ```

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use parking_lot::RwLock;
use std::sync::Arc;

/// Identifies a subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<A> = Arc<dyn Fn(&A) + Send + Sync>;

/// A multicast event.
///
/// Handlers run in subscription order on the thread that raises the event.
/// They are invoked on a snapshot taken before the first call, so a handler
/// may subscribe or unsubscribe without deadlocking; such changes apply from
/// the next raise.
pub struct Event<A> {
    handlers: RwLock<Vec<(SubscriptionId, Handler<A>)>>,
    next_id: AtomicU64,
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl<A> Event<A> {
    /// Creates an event with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler, returning its subscription id.
    pub fn subscribe(&self, handler: impl Fn(&A) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push((id, Arc::new(handler)));
        id
    }

    /// Removes a handler. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    /// Invokes every handler with `args`.
    pub fn raise(&self, args: &A) {
        let snapshot: Vec<Handler<A>> = self
            .handlers
            .read()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in snapshot {
            handler(args);
        }
    }

    /// Returns the number of subscribed handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Returns whether no handler is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

/// Arguments of the generic property-changed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyChangedEventArgs {
    /// Name of the property whose value changed.
    pub property_name: &'static str,
}

impl PropertyChangedEventArgs {
    /// Creates arguments for `property_name`.
    #[must_use]
    pub const fn new(property_name: &'static str) -> Self {
        Self { property_name }
    }
}

/// Arguments of a typed per-property change event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingValueChanged<T> {
    /// The value before the change.
    pub old_value: T,
    /// The value after the change.
    pub new_value: T,
}

impl<T> SettingValueChanged<T> {
    /// Creates change arguments.
    #[must_use]
    pub const fn new(old_value: T, new_value: T) -> Self {
        Self {
            old_value,
            new_value,
        }
    }
}
