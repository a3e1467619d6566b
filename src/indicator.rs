//! Indicator model for the dot ring cursor.
//!
//! The indicator is two elements, a ring and a dot, both centred on the pointer.
//! Each element's class is its base name followed by the current cursor variant;
//! the stylesheet then decides how that class looks.

use crate::hover::CursorVariant;
use crate::pointer::PointerPosition;

/// Base class of the outer ring.
pub const RING_CLASS: &str = "ring";
/// Base class of the inner dot.
pub const DOT_CLASS: &str = "dot";

/// Builds an element class from its base name and the cursor variant.
///
/// The default variant yields the bare base name (`"ring"`), never `"ring "`.
pub fn class_name(base: &str, variant: &CursorVariant) -> String {
    if variant.is_default() {
        base.to_string()
    } else {
        format!("{} {}", base, variant.as_str())
    }
}

/// Returns true if the space-separated `class` list contains `name`.
pub fn has_class(class: &str, name: &str) -> bool {
    class.split_whitespace().any(|c| c == name)
}

/// Absolute placement of an indicator element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f32,
    pub top: f32,
}

impl Placement {
    /// Inline style string, e.g. `left: 120px; top: 340px`.
    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px", self.left, self.top)
    }

    pub fn center(&self) -> egui::Pos2 {
        egui::pos2(self.left, self.top)
    }
}

impl From<PointerPosition> for Placement {
    fn from(pos: PointerPosition) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
        }
    }
}

/// One rendered element of the indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorElement {
    pub class: String,
    pub placement: Placement,
}

impl IndicatorElement {
    pub fn has_class(&self, name: &str) -> bool {
        has_class(&self.class, name)
    }
}

/// Snapshot of the whole indicator for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub ring: IndicatorElement,
    pub dot: IndicatorElement,
}

impl IndicatorFrame {
    /// Composes the ring and dot for the given pointer position and variant.
    pub fn compose(position: PointerPosition, variant: &CursorVariant) -> Self {
        let placement = Placement::from(position);
        Self {
            ring: IndicatorElement {
                class: class_name(RING_CLASS, variant),
                placement,
            },
            dot: IndicatorElement {
                class: class_name(DOT_CLASS, variant),
                placement,
            },
        }
    }

    /// Elements in paint order (ring below dot).
    pub fn elements(&self) -> [&IndicatorElement; 2] {
        [&self.ring, &self.dot]
    }
}
