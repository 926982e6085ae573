//! Main application state and rendering.

use eframe::egui::{self, ViewportCommand};
use tracing::{debug, info, warn};

use climate_core::labels::{room_title, system_button_caption};
use climate_core::{Dashboard, RoomForm, SettingsFile};
use climate_types::RoomId;

use crate::components;
use crate::dialogs::{self, AboutStep, EditOutcome};
use crate::menu::{self, MenuCommand};
use crate::theme::{Theme, ThemeMode};

/// The climate control window.
pub struct ClimateApp {
    dashboard: Dashboard,
    settings: SettingsFile,
    theme_mode: ThemeMode,
    theme: Theme,
    /// Form of the room being edited, if the edit dialog is open.
    editor: Option<RoomForm>,
    /// About notice currently shown.
    about: Option<AboutStep>,
}

impl ClimateApp {
    /// Create the app and apply its theme to the egui context.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        dashboard: Dashboard,
        settings: SettingsFile,
        theme_mode: ThemeMode,
    ) -> Self {
        let app = Self::with_parts(dashboard, settings, theme_mode);
        cc.egui_ctx.set_style(app.theme.to_style());
        app
    }

    /// Create the app without touching any egui context.
    pub fn with_parts(dashboard: Dashboard, settings: SettingsFile, theme_mode: ThemeMode) -> Self {
        Self {
            dashboard,
            settings,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            editor: None,
            about: None,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Whether the edit dialog is open.
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// About notice currently shown.
    pub fn about_step(&self) -> Option<AboutStep> {
        self.about
    }

    /// Carry out a menu command.
    pub fn handle_command(&mut self, ctx: &egui::Context, command: MenuCommand) {
        debug!("Menu command: {:?}", command);
        match command {
            MenuCommand::Exit => ctx.send_viewport_cmd(ViewportCommand::Close),
            MenuCommand::SetDarkTheme(dark) => {
                self.theme_mode = ThemeMode::from_dark(dark);
                self.theme = Theme::for_mode(self.theme_mode);
                ctx.set_style(self.theme.to_style());
            }
            MenuCommand::About => self.about = Some(AboutStep::About),
        }
    }

    /// Open the edit dialog for a room.
    pub fn open_editor(&mut self, room: RoomId) {
        match self.dashboard.open_editor(room.get()) {
            Ok(form) => self.editor = Some(form),
            Err(e) => warn!("Cannot edit room {}: {}", room, e),
        }
    }

    /// Render one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        let command = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| menu::menu_bar(ui, self.theme_mode.is_dark()))
            .inner;
        if let Some(command) = command {
            self.handle_command(ctx, command);
        }

        self.render_controls(ctx);
        self.render_rooms(ctx);
        self.render_dialogs(ctx);
    }

    fn render_controls(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(self.theme.spacing.md);
                let caption = system_button_caption(self.dashboard.system_state());
                if ui.button(caption).clicked() {
                    let state = self.dashboard.toggle_system();
                    info!("Air conditioning system {}", state);
                }

                ui.add_space(self.theme.spacing.lg);
                let mut slider = self.dashboard.slider();
                if components::temperature_slider(ui, &mut slider) {
                    self.dashboard.move_slider(slider);
                }

                ui.add_space(self.theme.spacing.lg);
                let prefs = self.dashboard.preferences();
                if let Some(unit) = components::temperature_unit_combo(ui, prefs.temperature_unit) {
                    self.dashboard.set_temperature_unit(unit);
                }
                if let Some(unit) = components::pressure_unit_combo(ui, prefs.pressure_unit) {
                    self.dashboard.set_pressure_unit(unit);
                }
            });
    }

    fn render_rooms(&mut self, ctx: &egui::Context) {
        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            components::rooms_frame(ui, &self.theme, |ui| {
                ui.columns(RoomId::ALL.len(), |columns| {
                    for (column, room) in columns.iter_mut().zip(RoomId::ALL) {
                        let labels = self.dashboard.labels_for(room);
                        let title = room_title(room);
                        if components::room_card(column, &self.theme, &title, &labels).clicked() {
                            clicked = Some(room);
                        }
                    }
                });
            });
        });

        // One dialog at a time
        if let Some(room) = clicked
            && self.editor.is_none()
        {
            self.open_editor(room);
        }
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(form) = self.editor.as_mut() {
            match dialogs::edit_dialog(ctx, form) {
                EditOutcome::Pending => {}
                EditOutcome::Save => {
                    let room = form.room;
                    if let Err(e) = self.dashboard.commit_edit(room.get(), form) {
                        warn!("Failed to save room {}: {}", room, e);
                    }
                    self.editor = None;
                }
                EditOutcome::Cancel => {
                    debug!("Edit of room {} cancelled", form.room);
                    self.editor = None;
                }
            }
        }

        if let Some(step) = self.about
            && dialogs::about_dialog(ctx, step)
        {
            self.about = step.next();
        }
    }
}

impl eframe::App for ClimateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Saving preferences before exit");
        self.settings.save_or_log(&self.dashboard.preferences());
    }
}
