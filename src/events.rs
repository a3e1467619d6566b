//! Single-threaded listener registry.
//!
//! This module provides the event plumbing shared by the pointer tracker and the
//! hover store:
//! - `EventSource<T>` holds listeners and dispatches values to them synchronously
//! - `Subscription` is the scoped handle returned on registration; dropping it
//!   deregisters the listener
//!
//! Everything runs on the UI thread, so the registry lives behind `Rc<RefCell<_>>`
//! and no locking is involved.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::pointer::PointerPosition;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

/// A source of events of type `T`.
///
/// Cloning an `EventSource` yields another handle to the same registry.
pub struct EventSource<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

/// The global pointer-move source the host window feeds every frame.
pub type PointerEvents = EventSource<PointerPosition>;

impl<T> Clone for EventSource<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T: 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}

impl<T: 'static> EventSource<T> {
    /// Creates an empty event source.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers a listener and returns the subscription that keeps it alive.
    ///
    /// The listener stays registered until the returned `Subscription` is
    /// dropped or explicitly unsubscribed.
    #[must_use = "dropping the subscription immediately removes the listener"]
    pub fn add_listener(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            let listener: Listener<T> = Rc::new(listener);
            registry.listeners.push((id, listener));
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Delivers `value` to every registered listener.
    ///
    /// Listeners are snapshotted before the calls, so a listener may add or
    /// remove subscriptions while being notified.
    ///
    /// # Returns
    /// The number of listeners that were called
    pub fn dispatch(&self, value: T) -> usize {
        let snapshot: Vec<Listener<T>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(&value);
        }
        snapshot.len()
    }

    /// Returns the number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Scoped registration of a listener on an `EventSource`.
#[must_use = "dropping the subscription immediately removes the listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Removes the listener now instead of waiting for drop.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_all_listeners() {
        let source: EventSource<i32> = EventSource::new();
        let total = Rc::new(Cell::new(0));

        let a = {
            let total = Rc::clone(&total);
            source.add_listener(move |v| total.set(total.get() + *v))
        };
        let b = {
            let total = Rc::clone(&total);
            source.add_listener(move |v| total.set(total.get() + *v * 10))
        };

        assert_eq!(source.dispatch(2), 2);
        assert_eq!(total.get(), 22);

        drop(a);
        drop(b);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_drop_subscription_detaches() {
        let source: EventSource<()> = EventSource::new();
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let hits = Rc::clone(&hits);
            source.add_listener(move |_| hits.set(hits.get() + 1))
        };
        source.dispatch(());
        subscription.unsubscribe();
        assert_eq!(source.dispatch(()), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_subscription_outliving_source() {
        let source: EventSource<u8> = EventSource::new();
        let subscription = source.add_listener(|_| {});
        drop(source);
        // Registry is gone, detaching must be a no-op
        drop(subscription);
    }

    #[test]
    fn test_listener_can_unsubscribe_during_dispatch() {
        let source: EventSource<()> = EventSource::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let subscription = {
            let slot = Rc::clone(&slot);
            source.add_listener(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        assert_eq!(source.dispatch(()), 1);
        assert_eq!(source.listener_count(), 0);
    }
}
