//! Root view composition.
//!
//! `RootView` wires the pieces together the way the window shows them: a pointer
//! tracker driving the indicator position, the shared hover store driving its
//! class, and interactive regions that flip the hover variant on enter/leave.
//! It has no egui dependency beyond geometry types, so the window and the tests
//! drive the same code path.

use log::debug;

use crate::events::PointerEvents;
use crate::hover::{CursorVariant, HoverStateStore, VariantSetter};
use crate::indicator::IndicatorFrame;
use crate::pointer::{PointerPosition, PointerTracker};
use crate::region::{HoverRegion, HoverTransition};

/// Index of an interactive region within a `RootView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

/// The mounted dot ring view.
#[derive(Debug)]
pub struct RootView {
    tracker: PointerTracker,
    hover: HoverStateStore,
    setter: VariantSetter,
    regions: Vec<HoverRegion>,
    debug_trace: bool,
}

impl RootView {
    /// Mounts the view: subscribes to pointer moves and binds the hover store.
    ///
    /// The view starts with a single interactive region (`RootView::PRIMARY`).
    pub fn mount(events: &PointerEvents, hover: &HoverStateStore) -> Self {
        Self {
            tracker: PointerTracker::mount(events),
            hover: hover.clone(),
            setter: hover.setter(),
            regions: vec![HoverRegion::new()],
            debug_trace: false,
        }
    }

    /// The "Hover over me" region created on mount.
    pub const PRIMARY: RegionId = RegionId(0);

    /// Adds another interactive region.
    pub fn add_region(&mut self) -> RegionId {
        self.regions.push(HoverRegion::new());
        RegionId(self.regions.len() - 1)
    }

    /// Enables the per-render variant trace (logged at debug level).
    pub fn set_debug_trace(&mut self, enabled: bool) {
        self.debug_trace = enabled;
    }

    pub fn pointer_position(&self) -> PointerPosition {
        self.tracker.position()
    }

    pub fn variant(&self) -> CursorVariant {
        self.hover.current_variant()
    }

    /// Feeds this frame's hover flag for a region.
    ///
    /// Unknown region ids are ignored.
    pub fn set_region_hovered(&mut self, region: RegionId, hovered: bool) -> Option<HoverTransition> {
        let setter = &self.setter;
        self.regions
            .get_mut(region.0)
            .and_then(|r| r.update_and_apply(hovered, setter))
    }

    /// Pointer entered `region`.
    pub fn pointer_enter(&mut self, region: RegionId) -> Option<HoverTransition> {
        self.set_region_hovered(region, true)
    }

    /// Pointer left `region`.
    pub fn pointer_leave(&mut self, region: RegionId) -> Option<HoverTransition> {
        self.set_region_hovered(region, false)
    }

    /// Renders the indicator for the current pointer position and variant.
    pub fn render(&self) -> IndicatorFrame {
        let variant = self.hover.current_variant();
        if self.debug_trace {
            debug!("cursor variant: {:?}", variant.as_str());
        }
        IndicatorFrame::compose(self.tracker.position(), &variant)
    }

    /// Tears the view down, detaching its pointer-move listener.
    pub fn unmount(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_registers_one_listener() {
        let events = PointerEvents::new();
        let store = HoverStateStore::new();
        let view = RootView::mount(&events, &store);
        assert_eq!(events.listener_count(), 1);
        view.unmount();
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_initial_render() {
        let events = PointerEvents::new();
        let store = HoverStateStore::new();
        let view = RootView::mount(&events, &store);

        let frame = view.render();
        assert_eq!(frame.ring.class, "ring");
        assert_eq!(frame.ring.placement.style(), "left: 0px; top: 0px");
    }

    #[test]
    fn test_unknown_region_ignored() {
        let events = PointerEvents::new();
        let store = HoverStateStore::new();
        let mut view = RootView::mount(&events, &store);

        assert_eq!(view.pointer_enter(RegionId(7)), None);
        assert!(view.variant().is_default());
    }

    #[test]
    fn test_regions_toggle_independently() {
        let events = PointerEvents::new();
        let store = HoverStateStore::new();
        let mut view = RootView::mount(&events, &store);
        let second = view.add_region();

        view.pointer_enter(RootView::PRIMARY);
        view.pointer_leave(RootView::PRIMARY);
        view.pointer_enter(second);
        assert_eq!(view.variant(), CursorVariant::hovered());
    }
}
