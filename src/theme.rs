//! Theme support for the dot ring window
//!
//! Each theme provides the page colors (background, text, region fills) and the
//! cursor colors used by the default stylesheet. The `ThemeManager` owns the
//! built-in themes (Light, Dark, Peach) and applies them to egui visuals.
//!
//! # Examples
//!
//! ```
//! use dotring::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let peach = manager.get_theme("Peach").unwrap();
//! println!("Peach ring: {:?}", peach.colors.ring);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Color palette of a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Page
    pub background: Color32,
    pub text: Color32,
    pub region_fill: Color32,
    pub accent_region_fill: Color32,

    // Cursor
    pub ring: Color32,
    pub ring_hovered: Color32,
    pub dot: Color32,
}

/// A theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Registry of all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    /// Fallback for unknown names, always present
    default_theme: Theme,
}

impl ThemeManager {
    /// Creates a ThemeManager with the built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [light_theme(), dark_theme(), peach_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            default_theme: light_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.default_theme)
    }

    /// Returns a sorted list of all theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Checks that a theme exists
    pub fn validate(&self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Builds egui visuals for a theme
    pub fn visuals_for(&self, theme: &Theme) -> egui::Visuals {
        let mut visuals = if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let colors = &theme.colors;

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.override_text_color = Some(colors.text);
        visuals.widgets.noninteractive.bg_fill = colors.region_fill;

        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme used when no preference is stored
pub const DEFAULT_THEME: &str = "Light";

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        dark: false,
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(20, 20, 20),
            region_fill: Color32::from_rgb(238, 238, 238),
            accent_region_fill: hex_to_color32("#ffdab9"), // peachpuff
            // rgba(31, 30, 30, 0.808)
            ring: with_alpha(Color32::from_rgb(31, 30, 30), 206),
            ring_hovered: hex_to_color32("#d3d3d3"), // lightgray
            dot: Color32::BLACK,
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        dark: true,
        colors: ThemeColors {
            background: hex_to_color32("#1b1b1f"),
            text: hex_to_color32("#f2f2f2"),
            region_fill: hex_to_color32("#2a2a30"),
            accent_region_fill: hex_to_color32("#8a5a44"),
            ring: with_alpha(hex_to_color32("#e8e8e8"), 206),
            ring_hovered: hex_to_color32("#7f7f8a"),
            dot: Color32::WHITE,
        },
    }
}

fn peach_theme() -> Theme {
    Theme {
        name: "Peach".to_string(),
        dark: false,
        colors: ThemeColors {
            background: hex_to_color32("#fff5ee"), // seashell
            text: hex_to_color32("#5a3825"),
            region_fill: hex_to_color32("#ffe4c4"), // bisque
            accent_region_fill: hex_to_color32("#ffdab9"),
            ring: hex_to_color32("#e9967a"), // darksalmon
            ring_hovered: hex_to_color32("#f4c2a1"),
            dot: hex_to_color32("#a0522d"), // sienna
        },
    }
}

/// Converts a hex color string (like "#ffdab9") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Returns the color with its alpha channel replaced (unmultiplied)
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ffdab9"), Color32::from_rgb(255, 218, 185));
        assert_eq!(hex_to_color32("d3d3d3"), Color32::from_rgb(211, 211, 211));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_hex_to_color32_non_ascii() {
        // Six bytes, but not six ASCII digits
        assert_eq!(hex_to_color32("aéxyz"), Color32::from_rgb(0, 0, 0));
        assert_eq!(hex_to_color32("#ffé0f"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_builtin_themes() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Light", "Peach"]);
        assert!(manager.validate("Dark").is_ok());
        assert!(manager.validate("Solarized").is_err());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::new();
        assert_eq!(manager.theme_or_default("missing").name, DEFAULT_THEME);
        assert_eq!(manager.theme_or_default("Peach").name, "Peach");
    }
}
