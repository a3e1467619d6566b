//! Shared hover state for the cursor indicator.
//!
//! `HoverStateStore` holds the application-wide cursor variant together with the
//! setter that views use to change it. The store is a cheap clonable handle: the
//! root view creates one and passes it by reference to every view that needs it,
//! which plays the role of an ambient context without a global singleton.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::events::{EventSource, Subscription};

/// Variant name applied while an interactive region is hovered.
pub const HOVERED: &str = "hovered";

/// Named visual state of the cursor indicator.
///
/// The empty string is the default state. Any other string is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CursorVariant(String);

impl CursorVariant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `"hovered"` variant.
    pub fn hovered() -> Self {
        Self::new(HOVERED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty (default) variant.
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CursorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CursorVariant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CursorVariant {
    fn from(name: String) -> Self {
        Self(name)
    }
}

struct StoreInner {
    variant: RefCell<CursorVariant>,
    changes: EventSource<CursorVariant>,
    notifications: Cell<u64>,
}

/// Application-lifetime cursor variant plus its setter.
///
/// Cloning the store produces another handle to the same state.
#[derive(Clone)]
pub struct HoverStateStore {
    inner: Rc<StoreInner>,
}

impl fmt::Debug for HoverStateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverStateStore")
            .field("variant", &*self.inner.variant.borrow())
            .field("notifications", &self.inner.notifications.get())
            .finish_non_exhaustive()
    }
}

impl Default for HoverStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverStateStore {
    /// Creates a store holding the default (empty) variant.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StoreInner {
                variant: RefCell::new(CursorVariant::default()),
                changes: EventSource::new(),
                notifications: Cell::new(0),
            }),
        }
    }

    /// Returns the current variant.
    pub fn current_variant(&self) -> CursorVariant {
        self.inner.variant.borrow().clone()
    }

    /// Replaces the current variant and notifies every subscriber.
    ///
    /// Subscribers are notified on every call, including when the value does not
    /// change.
    pub fn set_variant(&self, variant: impl Into<CursorVariant>) {
        let variant = variant.into();
        *self.inner.variant.borrow_mut() = variant.clone();
        self.inner.notifications.set(self.inner.notifications.get() + 1);
        self.inner.changes.dispatch(variant);
    }

    /// Returns the setter as a standalone, clonable function object.
    pub fn setter(&self) -> VariantSetter {
        VariantSetter {
            store: self.clone(),
        }
    }

    /// Registers a callback invoked with the new variant after each `set_variant`.
    #[must_use = "dropping the subscription immediately removes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&CursorVariant) + 'static) -> Subscription {
        self.inner.changes.add_listener(listener)
    }

    /// Number of change notifications emitted so far.
    pub fn notification_count(&self) -> u64 {
        self.inner.notifications.get()
    }

    /// Returns true if both handles refer to the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// The store's setter, detached from read access.
#[derive(Debug, Clone)]
pub struct VariantSetter {
    store: HoverStateStore,
}

impl VariantSetter {
    pub fn set(&self, variant: impl Into<CursorVariant>) {
        self.store.set_variant(variant);
    }
}
