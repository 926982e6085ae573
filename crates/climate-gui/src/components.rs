//! Widgets of the main window.

use egui::{Response, RichText, Ui};

use climate_core::RoomLabels;
use climate_core::units::SLIDER_MAX;
use climate_types::{PressureUnit, TemperatureUnit};

use crate::theme::Theme;

/// Frame around the three room columns.
pub fn rooms_frame<R>(ui: &mut Ui, theme: &Theme, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(theme.rooms_fill)
        .stroke(egui::Stroke::new(theme.rooms_border_width, theme.rooms_border))
        .corner_radius(egui::CornerRadius::same(theme.rounding.panel as u8))
        .inner_margin(egui::Margin::same(theme.spacing.panel_padding as i8))
        .show(ui, add_contents)
        .inner
}

/// One room: the edit button above its four lines.
///
/// Returns the button response so the caller can open the editor.
pub fn room_card(ui: &mut Ui, theme: &Theme, title: &str, labels: &RoomLabels) -> Response {
    ui.vertical(|ui| {
        let button = ui.button(title);
        ui.add_space(theme.spacing.sm);
        ui.label(&labels.temperature);
        ui.label(&labels.humidity);
        ui.label(&labels.pressure);
        ui.label(&labels.airflow);
        button
    })
    .inner
}

/// Vertical temperature slider. Returns `true` when it moved this frame.
pub fn temperature_slider(ui: &mut Ui, value: &mut u8) -> bool {
    ui.label(RichText::new("Температура:"));
    ui.add(egui::Slider::new(value, 0..=SLIDER_MAX).vertical().show_value(false))
        .changed()
}

/// Temperature unit combo box. Returns the unit picked this frame, if any.
pub fn temperature_unit_combo(ui: &mut Ui, current: TemperatureUnit) -> Option<TemperatureUnit> {
    let mut selected = current;
    egui::ComboBox::from_id_salt("temperature_unit")
        .selected_text(current.symbol())
        .show_ui(ui, |ui| {
            for unit in TemperatureUnit::ALL {
                ui.selectable_value(&mut selected, unit, unit.symbol());
            }
        });
    (selected != current).then_some(selected)
}

/// Pressure unit combo box. Returns the unit picked this frame, if any.
pub fn pressure_unit_combo(ui: &mut Ui, current: PressureUnit) -> Option<PressureUnit> {
    let mut selected = current;
    egui::ComboBox::from_id_salt("pressure_unit")
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for unit in PressureUnit::ALL {
                ui.selectable_value(&mut selected, unit, unit.label());
            }
        });
    (selected != current).then_some(selected)
}
