//! Desktop window for the room climate monitor.
//!
//! Built with [egui](https://www.egui.rs/). The window reads everything it
//! shows from [`climate_core::Dashboard`] each frame and turns user input
//! into dashboard operations.
//!
//! # Usage
//!
//! ```bash
//! climate-gui
//! climate-gui --dark --settings ./settings.xml
//! ```

mod app;
mod components;
mod dialogs;
mod menu;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use climate_core::{Dashboard, SettingsFile};

pub use app::ClimateApp;
pub use dialogs::{AboutStep, EditOutcome};
pub use menu::MenuCommand;
pub use theme::{Theme, ThemeMode};

/// Window title.
pub const APP_TITLE: &str = "Климат-контроль";

/// Options for running the GUI application.
#[derive(Debug, Default, Clone)]
pub struct GuiOptions {
    /// Preference file location; the platform config directory when unset.
    pub settings: Option<PathBuf>,
    /// Start with the dark theme.
    pub dark: bool,
}

impl GuiOptions {
    /// Preference file these options point at.
    pub fn settings_file(&self) -> SettingsFile {
        match &self.settings {
            Some(path) => SettingsFile::new(path),
            None => SettingsFile::default(),
        }
    }
}

/// Run the GUI application.
///
/// Installs logging, loads the unit preferences, then runs the eframe event
/// loop until the window closes. Preferences are saved on exit.
pub fn run(options: GuiOptions) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = options.settings_file();
    info!("Using settings at: {}", settings.path().display());

    let mut dashboard = Dashboard::new();
    dashboard.apply_preferences(settings.load_or_default());

    let theme_mode = ThemeMode::from_dark(options.dark);

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size([800.0, 600.0])
        .with_min_inner_size([800.0, 600.0])
        .with_max_inner_size([1920.0, 1080.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(ClimateApp::new(
                cc, dashboard, settings, theme_mode,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}
