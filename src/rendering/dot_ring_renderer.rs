//! Dot ring painting.
//!
//! Paints the ring and dot of an `IndicatorFrame` on a foreground layer so they
//! stay above every panel. Size changes ease over the style's transition time.

use eframe::egui;
use dotring::{IndicatorElement, IndicatorFrame, IndicatorStyle, StyleSheet};

/// Paints the indicator at its placement.
///
/// # Arguments
/// * `ctx` - The egui context
/// * `frame` - Ring and dot classes and placement for this frame
/// * `stylesheet` - Resolves each element's class into a style
pub fn render_dot_ring(ctx: &egui::Context, frame: &IndicatorFrame, stylesheet: &StyleSheet) {
    let layer = egui::LayerId::new(egui::Order::Foreground, egui::Id::new("dot_ring"));
    let painter = ctx.layer_painter(layer);

    for (index, element) in frame.elements().into_iter().enumerate() {
        let style = stylesheet.resolve(&element.class);
        if !style.visible {
            continue;
        }
        let (diameter, stroke_width) = eased_size(ctx, index, &style);
        paint_element(&painter, element, &style, diameter, stroke_width);
    }
}

fn eased_size(ctx: &egui::Context, index: usize, style: &IndicatorStyle) -> (f32, f32) {
    let seconds = style.transition_ms as f32 / 1000.0;
    let diameter = ctx.animate_value_with_time(egui::Id::new(("dot_ring_diameter", index)), style.diameter, seconds);
    let stroke_width =
        ctx.animate_value_with_time(egui::Id::new(("dot_ring_stroke", index)), style.stroke_width, seconds);
    (diameter, stroke_width)
}

fn paint_element(
    painter: &egui::Painter,
    element: &IndicatorElement,
    style: &IndicatorStyle,
    diameter: f32,
    stroke_width: f32,
) {
    let center = element.placement.center();
    let radius = diameter / 2.0;

    if style.fill != egui::Color32::TRANSPARENT {
        painter.circle_filled(center, radius, style.fill);
    }
    if stroke_width > 0.0 {
        painter.circle_stroke(center, radius, egui::Stroke::new(stroke_width, style.stroke));
    }
}
