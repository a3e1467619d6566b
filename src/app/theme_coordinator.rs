//! Theme persistence and application.
//!
//! Handles the stored theme preference and applying the active theme to egui.

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the stored theme preference, if any.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> Option<String> {
        storage.and_then(|s| s.get_string(THEME_KEY))
    }

    /// Saves the theme preference to persistent storage.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame; egui skips the work when the visuals are unchanged.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.themes.theme_or_default(state.current_theme_name());
        ctx.set_visuals(state.themes.visuals_for(theme));
    }
}
