//! Interactive hover regions.
//!
//! egui reports hover as a per-frame boolean. `HoverRegion` remembers the previous
//! frame and turns those booleans into pointer-enter and pointer-leave transitions.

use crate::hover::{CursorVariant, VariantSetter};

/// Edge produced when the pointer crosses a region boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Enter,
    Leave,
}

/// Hover state of one interactive region.
#[derive(Debug, Clone, Default)]
pub struct HoverRegion {
    hovered: bool,
}

impl HoverRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the pointer is inside the region.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Records this frame's hover flag and returns the transition, if any.
    pub fn update(&mut self, hovered_now: bool) -> Option<HoverTransition> {
        let transition = match (self.hovered, hovered_now) {
            (false, true) => Some(HoverTransition::Enter),
            (true, false) => Some(HoverTransition::Leave),
            _ => None,
        };
        self.hovered = hovered_now;
        transition
    }

    /// Like `update`, and forwards the transition to the cursor variant setter.
    ///
    /// Enter sets `"hovered"`, leave resets to the default variant.
    pub fn update_and_apply(
        &mut self,
        hovered_now: bool,
        setter: &VariantSetter,
    ) -> Option<HoverTransition> {
        let transition = self.update(hovered_now);
        match transition {
            Some(HoverTransition::Enter) => setter.set(CursorVariant::hovered()),
            Some(HoverTransition::Leave) => setter.set(CursorVariant::default()),
            None => {}
        }
        transition
    }
}
