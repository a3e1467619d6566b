//! Cursor settings.
//!
//! `CursorSettings` is the serializable configuration of the dot ring window:
//! theme, indicator sizes, and the debug trace switch. It is persisted between
//! sessions through eframe storage and can be seeded from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::hover::HOVERED;
use crate::indicator::{DOT_CLASS, RING_CLASS};
use crate::style::{StylePatch, StyleSheet};
use crate::theme::{ThemeColors, DEFAULT_THEME};

/// User-facing configuration of the cursor indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    /// Name of the active theme
    pub theme: String,
    /// Ring diameter in the default state
    pub ring_diameter: f32,
    /// Ring diameter while hovering an interactive region
    pub hovered_ring_diameter: f32,
    pub ring_stroke_width: f32,
    pub hovered_ring_stroke_width: f32,
    pub dot_diameter: f32,
    /// Ring size/color easing duration
    pub transition_ms: u32,
    /// Hide the operating system cursor while over the window
    pub hide_system_cursor: bool,
    /// Log the cursor variant on every frame
    pub debug_trace: bool,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            ring_diameter: 22.0,
            hovered_ring_diameter: 50.0,
            ring_stroke_width: 2.0,
            hovered_ring_stroke_width: 3.0,
            dot_diameter: 8.0,
            transition_ms: 100,
            hide_system_cursor: true,
            debug_trace: false,
        }
    }
}

impl CursorSettings {
    /// Loads settings from a JSON file. Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Builds the indicator stylesheet for these settings and a color palette.
    pub fn stylesheet(&self, colors: &ThemeColors) -> StyleSheet {
        let ring_hovered = format!("{}.{}", RING_CLASS, HOVERED);
        let dot_hovered = format!("{}.{}", DOT_CLASS, HOVERED);

        StyleSheet::new()
            .rule(
                RING_CLASS,
                StylePatch {
                    diameter: Some(self.ring_diameter),
                    stroke_width: Some(self.ring_stroke_width),
                    stroke: Some(colors.ring),
                    transition_ms: Some(self.transition_ms),
                    ..Default::default()
                },
            )
            .rule(
                DOT_CLASS,
                StylePatch {
                    diameter: Some(self.dot_diameter),
                    fill: Some(colors.dot),
                    ..Default::default()
                },
            )
            .rule(
                &ring_hovered,
                StylePatch {
                    diameter: Some(self.hovered_ring_diameter),
                    stroke_width: Some(self.hovered_ring_stroke_width),
                    stroke: Some(colors.ring_hovered),
                    ..Default::default()
                },
            )
            .rule(
                &dot_hovered,
                StylePatch {
                    visible: Some(false),
                    ..Default::default()
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeManager;
    use std::env;

    #[test]
    fn test_partial_json_uses_defaults() -> Result<()> {
        let path = env::temp_dir().join("dotring_partial_settings.json");
        fs::write(&path, r#"{ "theme": "Peach", "debug_trace": true }"#)?;

        let settings = CursorSettings::from_json_file(&path)?;
        assert_eq!(settings.theme, "Peach");
        assert!(settings.debug_trace);
        assert_eq!(settings.ring_diameter, 22.0);

        let _ = fs::remove_file(&path);
        Ok(())
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = CursorSettings::from_json_file("/nonexistent/dotring.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dotring.json"));
    }

    #[test]
    fn test_stylesheet_hovered_rules() {
        let manager = ThemeManager::new();
        let colors = &manager.theme_or_default("Light").colors;
        let sheet = CursorSettings::default().stylesheet(colors);
        assert_eq!(sheet.len(), 4);

        let ring = sheet.resolve("ring");
        assert_eq!(ring.diameter, 22.0);
        assert_eq!(ring.stroke, colors.ring);

        let hovered = sheet.resolve("ring hovered");
        assert_eq!(hovered.diameter, 50.0);
        assert_eq!(hovered.stroke, colors.ring_hovered);
        assert_eq!(hovered.transition_ms, 100);

        assert!(sheet.resolve("dot").visible);
        assert!(!sheet.resolve("dot hovered").visible);
    }
}
