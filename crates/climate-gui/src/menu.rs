//! Menu bar of the main window.
//!
//! The bar only reports what was picked; [`crate::ClimateApp`] carries the
//! command out.

use egui::Ui;

/// Commands that can be triggered from the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    // === Файл ===
    /// Close the window (preferences are saved on exit)
    Exit,

    // === Настройки ===
    /// Dark theme check toggled to the given state
    SetDarkTheme(bool),

    // === Помощь ===
    /// Show the about dialogs
    About,
}

/// Render the menu bar and return the command picked this frame, if any.
pub fn menu_bar(ui: &mut Ui, dark: bool) -> Option<MenuCommand> {
    let mut command = None;
    egui::MenuBar::new().ui(ui, |ui| {
        ui.menu_button("Файл", |ui| {
            if ui.button("Выход").clicked() {
                command = Some(MenuCommand::Exit);
                ui.close();
            }
        });
        ui.menu_button("Настройки", |ui| {
            let mut checked = dark;
            if ui.checkbox(&mut checked, "Темная тема").changed() {
                command = Some(MenuCommand::SetDarkTheme(checked));
                ui.close();
            }
        });
        ui.menu_button("Помощь", |ui| {
            if ui.button("О программе").clicked() {
                command = Some(MenuCommand::About);
                ui.close();
            }
        });
    });
    command
}
