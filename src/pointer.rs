//! Pointer position tracking.
//!
//! `PointerTracker` subscribes to the global pointer-move source when mounted and
//! keeps the latest coordinates. Unmounting (or dropping) the tracker releases the
//! subscription, after which further pointer-move events leave it untouched.

use std::cell::Cell;
use std::rc::Rc;

use crate::events::{PointerEvents, Subscription};

/// Pointer coordinates in window space (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<egui::Pos2> for PointerPosition {
    fn from(pos: egui::Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

impl From<PointerPosition> for egui::Pos2 {
    fn from(pos: PointerPosition) -> Self {
        egui::pos2(pos.x, pos.y)
    }
}

#[derive(Debug, Default)]
struct TrackedPosition {
    latest: Cell<PointerPosition>,
    updates: Cell<u64>,
}

/// Read-only view of a tracker's position.
///
/// The handle stays valid after the tracker is unmounted; it then keeps
/// reporting the last position seen before unmounting.
#[derive(Debug, Clone)]
pub struct PositionHandle {
    tracked: Rc<TrackedPosition>,
}

impl PositionHandle {
    /// Returns the latest observed position.
    pub fn get(&self) -> PointerPosition {
        self.tracked.latest.get()
    }

    /// Returns how many pointer-move events have been applied.
    pub fn update_count(&self) -> u64 {
        self.tracked.updates.get()
    }
}

/// Observes pointer-move events and exposes the current coordinates.
#[derive(Debug)]
pub struct PointerTracker {
    tracked: Rc<TrackedPosition>,
    _subscription: Subscription,
}

impl PointerTracker {
    /// Registers a pointer-move listener on `events`.
    ///
    /// The position starts at `{0, 0}` until the first event arrives.
    pub fn mount(events: &PointerEvents) -> Self {
        let tracked = Rc::new(TrackedPosition::default());

        let subscription = {
            let tracked = Rc::clone(&tracked);
            events.add_listener(move |pos: &PointerPosition| {
                tracked.latest.set(*pos);
                tracked.updates.set(tracked.updates.get() + 1);
            })
        };

        Self {
            tracked,
            _subscription: subscription,
        }
    }

    /// Returns the latest pointer position.
    pub fn position(&self) -> PointerPosition {
        self.tracked.latest.get()
    }

    /// Returns how many pointer-move events this tracker has applied.
    pub fn update_count(&self) -> u64 {
        self.tracked.updates.get()
    }

    /// Returns a handle that observes this tracker's position.
    pub fn handle(&self) -> PositionHandle {
        PositionHandle {
            tracked: Rc::clone(&self.tracked),
        }
    }

    /// Deregisters the listener. Equivalent to dropping the tracker.
    pub fn unmount(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_origin() {
        let events = PointerEvents::new();
        let tracker = PointerTracker::mount(&events);
        assert_eq!(tracker.position(), PointerPosition::new(0.0, 0.0));
        assert_eq!(tracker.update_count(), 0);
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn test_tracks_latest_move() {
        let events = PointerEvents::new();
        let tracker = PointerTracker::mount(&events);

        events.dispatch(PointerPosition::new(5.0, 6.0));
        events.dispatch(PointerPosition::new(-3.5, 1024.0));

        assert_eq!(tracker.position(), PointerPosition::new(-3.5, 1024.0));
        assert_eq!(tracker.update_count(), 2);
    }

    #[test]
    fn test_unmount_detaches_listener() {
        let events = PointerEvents::new();
        let tracker = PointerTracker::mount(&events);
        let handle = tracker.handle();

        events.dispatch(PointerPosition::new(10.0, 20.0));
        tracker.unmount();

        assert_eq!(events.dispatch(PointerPosition::new(99.0, 99.0)), 0);
        assert_eq!(handle.get(), PointerPosition::new(10.0, 20.0));
        assert_eq!(handle.update_count(), 1);
    }

    #[test]
    fn test_pos2_conversion() {
        let pos: PointerPosition = egui::pos2(1.5, 2.5).into();
        assert_eq!(pos, PointerPosition::new(1.5, 2.5));
        let back: egui::Pos2 = pos.into();
        assert_eq!(back, egui::pos2(1.5, 2.5));
    }
}
