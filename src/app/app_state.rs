//! Centralized application state for the dot ring window.
//!
//! Owns the long-lived pieces the root view is mounted against:
//! - the pointer-move source fed from egui input
//! - the application-wide hover store
//! - settings, themes, and the stylesheet derived from them

use dotring::{CursorSettings, HoverStateStore, PointerEvents, StyleSheet, ThemeManager};

/// Main application state.
pub struct AppState {
    /// Global pointer-move source
    pub pointer_events: PointerEvents,

    /// Shared cursor variant (context for all views)
    pub hover: HoverStateStore,

    /// Theme registry
    pub themes: ThemeManager,

    settings: CursorSettings,
    stylesheet: StyleSheet,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(CursorSettings::default())
    }
}

impl AppState {
    /// Creates the application state from loaded settings.
    ///
    /// An unknown theme name is replaced by the default theme.
    pub fn with_settings(mut settings: CursorSettings) -> Self {
        let themes = ThemeManager::new();
        if let Err(err) = themes.validate(&settings.theme) {
            log::warn!("{}, using default theme", err);
            settings.theme = themes.theme_or_default(&settings.theme).name.clone();
        }
        let stylesheet = settings.stylesheet(&themes.theme_or_default(&settings.theme).colors);

        Self {
            pointer_events: PointerEvents::new(),
            hover: HoverStateStore::new(),
            themes,
            settings,
            stylesheet,
        }
    }

    // ===== Queries =====

    pub fn settings(&self) -> &CursorSettings {
        &self.settings
    }

    pub fn stylesheet(&self) -> &StyleSheet {
        &self.stylesheet
    }

    pub fn current_theme_name(&self) -> &str {
        &self.settings.theme
    }

    // ===== Mutations =====

    /// Switches the active theme and rebuilds the stylesheet.
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        self.themes.validate(theme_name)?;
        self.settings.theme = theme_name.to_string();
        self.rebuild_stylesheet();
        Ok(())
    }

    pub fn set_debug_trace(&mut self, enabled: bool) {
        self.settings.debug_trace = enabled;
    }

    fn rebuild_stylesheet(&mut self) {
        let colors = &self.themes.theme_or_default(&self.settings.theme).colors;
        self.stylesheet = self.settings.stylesheet(colors);
    }
}
