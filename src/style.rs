//! Stylesheet for indicator elements.
//!
//! A `StyleSheet` is an ordered list of rules. Each rule has a selector made of
//! class names (`ring`, `ring.hovered`) and a partial style. Resolving a class
//! string applies, in order, every rule whose classes are all present, so later
//! and more specific rules override earlier ones.

use egui::Color32;

use crate::indicator::has_class;

/// Fully resolved look of an indicator element.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorStyle {
    /// Outer diameter in logical pixels
    pub diameter: f32,
    pub stroke_width: f32,
    pub stroke: Color32,
    pub fill: Color32,
    pub visible: bool,
    /// Duration of the size/color transition; 0 disables easing
    pub transition_ms: u32,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            diameter: 0.0,
            stroke_width: 0.0,
            stroke: Color32::TRANSPARENT,
            fill: Color32::TRANSPARENT,
            visible: true,
            transition_ms: 0,
        }
    }
}

/// Partial style; unset fields keep the value from earlier rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub diameter: Option<f32>,
    pub stroke_width: Option<f32>,
    pub stroke: Option<Color32>,
    pub fill: Option<Color32>,
    pub visible: Option<bool>,
    pub transition_ms: Option<u32>,
}

impl StylePatch {
    fn apply(&self, style: &mut IndicatorStyle) {
        if let Some(diameter) = self.diameter {
            style.diameter = diameter;
        }
        if let Some(width) = self.stroke_width {
            style.stroke_width = width;
        }
        if let Some(stroke) = self.stroke {
            style.stroke = stroke;
        }
        if let Some(fill) = self.fill {
            style.fill = fill;
        }
        if let Some(visible) = self.visible {
            style.visible = visible;
        }
        if let Some(ms) = self.transition_ms {
            style.transition_ms = ms;
        }
    }
}

/// A selector such as `ring.hovered`: all listed classes must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector(String);

impl Selector {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Returns true if every class in the selector appears in `class`.
    pub fn matches(&self, class: &str) -> bool {
        let mut parts = self.0.split('.').filter(|p| !p.is_empty()).peekable();
        parts.peek().is_some() && parts.all(|part| has_class(class, part))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct StyleRule {
    selector: Selector,
    patch: StylePatch,
}

/// Ordered collection of style rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule; it overrides every rule added before it.
    pub fn rule(mut self, selector: &str, patch: StylePatch) -> Self {
        self.rules.push(StyleRule {
            selector: Selector::new(selector),
            patch,
        });
        self
    }

    /// Resolves the style of an element with the given class string.
    pub fn resolve(&self, class: &str) -> IndicatorStyle {
        let mut style = IndicatorStyle::default();
        for rule in self.rules.iter().filter(|r| r.selector.matches(class)) {
            rule.patch.apply(&mut style);
        }
        style
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> StyleSheet {
        StyleSheet::new()
            .rule(
                "ring",
                StylePatch {
                    diameter: Some(22.0),
                    stroke_width: Some(2.0),
                    transition_ms: Some(100),
                    ..Default::default()
                },
            )
            .rule(
                "ring.hovered",
                StylePatch {
                    diameter: Some(50.0),
                    stroke_width: Some(3.0),
                    ..Default::default()
                },
            )
            .rule(
                "dot.hovered",
                StylePatch {
                    visible: Some(false),
                    ..Default::default()
                },
            )
    }

    #[test]
    fn test_rules_accumulate() {
        assert!(StyleSheet::new().is_empty());
        assert_eq!(sheet().len(), 3);
        assert!(!sheet().is_empty());
    }

    #[test]
    fn test_selector_matching() {
        assert!(Selector::new("ring").matches("ring hovered"));
        assert!(Selector::new("ring.hovered").matches("ring hovered"));
        assert!(!Selector::new("ring.hovered").matches("ring"));
        assert!(!Selector::new("").matches("ring"));
    }

    #[test]
    fn test_later_rules_override() {
        let style = sheet().resolve("ring hovered");
        assert_eq!(style.diameter, 50.0);
        assert_eq!(style.stroke_width, 3.0);
        // Inherited from the base rule
        assert_eq!(style.transition_ms, 100);
    }

    #[test]
    fn test_unmatched_class_gets_default() {
        let style = sheet().resolve("dot hovered");
        assert!(!style.visible);
        assert_eq!(style.diameter, 0.0);
        assert_eq!(sheet().resolve("unknown"), IndicatorStyle::default());
    }
}
