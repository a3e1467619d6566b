//! Header panel UI rendering
//!
//! Top bar with the theme selector, the debug trace switch, and a readout of the
//! pointer position and cursor variant.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use dotring::RootView;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a theme from the selector
    ThemeSelected(String),
    /// User flipped the debug trace checkbox
    DebugTraceToggled(bool),
}

/// Renders the header bar
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state (read-only; changes are returned as interactions)
/// * `view` - The mounted root view, for the position/variant readout
pub fn render_header(ui: &mut egui::Ui, state: &AppState, view: &RootView) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let current = state.current_theme_name();
        egui::ComboBox::from_label("Theme")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for name in state.themes.list_themes() {
                    if ui.selectable_label(name == current, name).clicked() && name != current {
                        interaction = Some(HeaderInteraction::ThemeSelected(name.to_string()));
                    }
                }
            });

        ui.separator();

        let mut debug_trace = state.settings().debug_trace;
        if ui.checkbox(&mut debug_trace, "Debug trace").changed() {
            interaction = Some(HeaderInteraction::DebugTraceToggled(debug_trace));
        }

        ui.separator();

        let pos = view.pointer_position();
        let variant = view.variant();
        let variant_text = if variant.is_default() { "(default)" } else { variant.as_str() };
        ui.label(RichText::new(format!("x: {:.0}  y: {:.0}", pos.x, pos.y)).monospace());
        ui.label(RichText::new(format!("variant: {}", variant_text)).strong());
    });

    interaction
}
