//! Dot Ring cursor window
//!
//! Replaces the system cursor with a ring and a dot that follow the pointer. The
//! ring grows and the dot disappears while the pointer is over the
//! "Hover over me" target.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is organised as:
//! - `app/` - Application state, theme and settings persistence
//! - `ui/` - Header and root panels, pointer input forwarding
//! - `rendering/` - Painting the ring and dot
//!
//! Pass a JSON settings file as the first argument to override stored settings.
//! Run with `RUST_LOG=dotring=debug` and enable "Debug trace" to log the cursor
//! variant on every frame.

use eframe::egui;
use log::{info, warn};
use std::path::{Path, PathBuf};

mod app;
mod rendering;
mod ui;

use app::{AppState, SettingsCoordinator, ThemeCoordinator};
use dotring::{CursorSettings, RootView};
use rendering::dot_ring_renderer;
use ui::header::{self, HeaderInteraction};
use ui::input::pointer_input;
use ui::root_panel;

const SETTINGS_KEY: &str = "cursor_settings";

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let settings_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("Dot Ring"),
        ..Default::default()
    };

    eframe::run_native(
        "Dot Ring",
        options,
        Box::new(move |cc| Ok(Box::new(DotRingApp::new(cc, settings_file.as_deref())))),
    )
}

/// The dot ring application: shared state plus the mounted root view.
struct DotRingApp {
    state: AppState,
    view: RootView,
}

impl DotRingApp {
    fn new(cc: &eframe::CreationContext, settings_file: Option<&Path>) -> Self {
        let settings = Self::load_settings(cc.storage, settings_file);
        let state = AppState::with_settings(settings);

        let mut view = RootView::mount(&state.pointer_events, &state.hover);
        view.set_debug_trace(state.settings().debug_trace);

        Self { state, view }
    }

    /// Resolves settings: stored settings, then the stored theme, then the file.
    fn load_settings(storage: Option<&dyn eframe::Storage>, settings_file: Option<&Path>) -> CursorSettings {
        let mut settings = SettingsCoordinator::load_setting_or(storage, SETTINGS_KEY, CursorSettings::default());
        if let Some(theme) = ThemeCoordinator::load_theme_from_storage(storage) {
            settings.theme = theme;
        }

        if let Some(path) = settings_file {
            match CursorSettings::from_json_file(path) {
                Ok(from_file) => {
                    info!("Loaded settings from {}", path.display());
                    settings = from_file;
                }
                Err(err) => warn!("{:#}", err),
            }
        }
        settings
    }

    fn handle_header_interaction(&mut self, interaction: HeaderInteraction) {
        match interaction {
            HeaderInteraction::ThemeSelected(name) => {
                if let Err(err) = self.state.set_theme(&name) {
                    warn!("{}", err);
                }
            }
            HeaderInteraction::DebugTraceToggled(enabled) => {
                self.state.set_debug_trace(enabled);
                self.view.set_debug_trace(enabled);
            }
        }
    }
}

impl eframe::App for DotRingApp {
    /// Persists the theme preference and settings on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.current_theme_name());
        SettingsCoordinator::save_setting(storage, SETTINGS_KEY, self.state.settings());
    }

    /// Per-frame update:
    /// 1. Apply the theme
    /// 2. Forward pointer moves to the tracker
    /// 3. Render the header and root panels (hover regions update the variant)
    /// 4. Paint the indicator on top
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        pointer_input::forward_pointer_moves(ctx, &self.state.pointer_events);

        let mut header_interaction = None;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header_interaction = header::render_header(ui, &self.state, &self.view);
        });
        if let Some(interaction) = header_interaction {
            self.handle_header_interaction(interaction);
        }

        root_panel::render_root_panel(ctx, &mut self.view, &self.state);

        if pointer_input::pointer_inside(ctx) {
            if self.state.settings().hide_system_cursor {
                ctx.set_cursor_icon(egui::CursorIcon::None);
            }
            let indicator = self.view.render();
            dot_ring_renderer::render_dot_ring(ctx, &indicator, self.state.stylesheet());
        }
    }
}
