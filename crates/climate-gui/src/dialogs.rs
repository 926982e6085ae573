//! Edit and about dialogs.

use egui::Context;

use climate_core::RoomForm;
use climate_types::AirflowDirection;

/// What happened to the edit dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Still open.
    Pending,
    /// "Сохранить" was clicked.
    Save,
    /// The window was closed without saving.
    Cancel,
}

/// Render the room edit dialog over `form`.
pub fn edit_dialog(ctx: &Context, form: &mut RoomForm) -> EditOutcome {
    let mut open = true;
    let mut save = false;

    egui::Window::new("Редактирование комнаты")
        .id(egui::Id::new("edit_room"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("edit_room_fields")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Температура:");
                    ui.text_edit_singleline(&mut form.temperature);
                    ui.end_row();

                    ui.label("Влажность:");
                    ui.text_edit_singleline(&mut form.humidity);
                    ui.end_row();

                    ui.label("Давление:");
                    ui.text_edit_singleline(&mut form.pressure);
                    ui.end_row();

                    ui.label("Направление подачи воздуха:");
                    egui::ComboBox::from_id_salt("airflow_direction")
                        .selected_text(form.airflow.label())
                        .show_ui(ui, |ui| {
                            for direction in AirflowDirection::ALL {
                                ui.selectable_value(&mut form.airflow, direction, direction.label());
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Сохранить").clicked() {
                save = true;
            }
        });

    if save {
        EditOutcome::Save
    } else if !open {
        EditOutcome::Cancel
    } else {
        EditOutcome::Pending
    }
}

/// The two notices of the help menu, shown one after the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutStep {
    About,
    Manual,
}

impl AboutStep {
    pub fn title(self) -> &'static str {
        match self {
            AboutStep::About => "О программе",
            AboutStep::Manual => "Руководство пользователя",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            AboutStep::About => {
                "Это приложение для управления и контроля системы кондиционирования.\n\
                 Версия: 1.0\n\
                 Автор: Vitrage"
            }
            AboutStep::Manual => {
                "Руководство пользователя может быть найдено в файле user_manual.docx"
            }
        }
    }

    /// Notice shown after this one is dismissed.
    pub fn next(self) -> Option<AboutStep> {
        match self {
            AboutStep::About => Some(AboutStep::Manual),
            AboutStep::Manual => None,
        }
    }
}

/// Render one about notice. Returns `true` once it is dismissed.
pub fn about_dialog(ctx: &Context, step: AboutStep) -> bool {
    let mut open = true;
    let mut dismissed = false;

    egui::Window::new(step.title())
        .id(egui::Id::new("about"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(step.text());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    dismissed || !open
}
