//! Root panel UI rendering
//!
//! Lays out the page under the header: an upper container holding the
//! "Hover over me" target and a lower peach container. Hovering the target is
//! reported to the root view, which updates the shared cursor variant.

use eframe::egui;
use egui::{pos2, vec2, Rect, RichText};
use crate::app::AppState;
use dotring::RootView;

/// Height of the hover target band inside the upper container
const HOVER_TARGET_HEIGHT: f32 = 72.0;

/// Renders both containers and feeds the target's hover state to `view`.
pub fn render_root_panel(ctx: &egui::Context, view: &mut RootView, state: &AppState) {
    let colors = &state.themes.theme_or_default(state.current_theme_name()).colors;
    let frame = egui::Frame::default().fill(colors.background);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let full = ui.available_rect_before_wrap();
        ui.allocate_rect(full, egui::Sense::hover());

        let split_y = full.center().y;
        let upper = Rect::from_min_max(full.min, pos2(full.max.x, split_y));
        let lower = Rect::from_min_max(pos2(full.min.x, split_y), full.max);

        let painter = ui.painter();
        painter.rect_filled(upper, 0.0, colors.region_fill);
        painter.rect_filled(lower, 0.0, colors.accent_region_fill);

        let target = Rect::from_center_size(upper.center(), vec2(upper.width(), HOVER_TARGET_HEIGHT));
        ui.put(
            target,
            egui::Label::new(RichText::new("Hover over me").heading().size(32.0).color(colors.text))
                .selectable(false),
        );

        let hovered = ui
            .interact(target, ui.id().with("hover_target"), egui::Sense::hover())
            .contains_pointer();
        view.set_region_hovered(RootView::PRIMARY, hovered);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::pointer_input;
    use dotring::CursorVariant;

    fn screen() -> Rect {
        Rect::from_min_size(egui::Pos2::ZERO, vec2(960.0, 720.0))
    }

    /// One frame of the app without the header: forward moves, lay out the page.
    fn run_frame(ctx: &egui::Context, events: Vec<egui::Event>, view: &mut RootView, state: &AppState) {
        let raw = egui::RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let _ = ctx.run(raw, |ctx| {
            pointer_input::forward_pointer_moves(ctx, &state.pointer_events);
            render_root_panel(ctx, view, state);
        });
    }

    fn moved_to(x: f32, y: f32) -> Vec<egui::Event> {
        vec![egui::Event::PointerMoved(pos2(x, y))]
    }

    #[test]
    fn test_hover_target_toggles_variant() {
        let ctx = egui::Context::default();
        let state = AppState::default();
        let mut view = RootView::mount(&state.pointer_events, &state.hover);

        // Target sits in the middle of the upper half; widget hit-testing
        // uses the previous frame's layout, so settle for a second frame.
        run_frame(&ctx, moved_to(480.0, 180.0), &mut view, &state);
        run_frame(&ctx, Vec::new(), &mut view, &state);
        assert_eq!(state.hover.current_variant(), CursorVariant::hovered());
        assert_eq!(view.render().ring.class, "ring hovered");

        run_frame(&ctx, moved_to(480.0, 600.0), &mut view, &state);
        assert!(state.hover.current_variant().is_default());
        assert_eq!(view.render().ring.class, "ring");
        assert_eq!(view.render().ring.placement.style(), "left: 480px; top: 600px");
    }

    #[test]
    fn test_outside_target_stays_default() {
        let ctx = egui::Context::default();
        let state = AppState::default();
        let mut view = RootView::mount(&state.pointer_events, &state.hover);

        run_frame(&ctx, moved_to(480.0, 20.0), &mut view, &state);
        run_frame(&ctx, Vec::new(), &mut view, &state);

        assert!(state.hover.current_variant().is_default());
        assert_eq!(state.hover.notification_count(), 0);
    }
}
