//! Application-level modules for the dot ring window.
//!
//! Centralized state plus the coordinators for theme and settings persistence.

mod app_state;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
