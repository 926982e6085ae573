//! Text projection of room state.
//!
//! Everything here turns numbers into the lines shown next to each room.
//! The output is for display only and is never parsed back.

use climate_types::{AirflowDirection, RoomId, SystemState};

/// Shown in place of an airflow direction until the room is edited.
pub const AIRFLOW_PLACEHOLDER: &str = "Направление подачи воздуха";

const TEMPERATURE_PREFIX: &str = "Температура: ";
const HUMIDITY_PREFIX: &str = "Влажность: ";
const PRESSURE_PREFIX: &str = "Давление: ";

/// Significant digits shown on every label.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Format a value the way C's `%g` does with 6 significant digits.
///
/// Trailing zeros are dropped, and the exponent form is used when the
/// decimal exponent is below -4 or at least 6.
///
/// ```
/// use climate_core::labels::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(101_325.0 / 133.322), "760.002");
/// assert_eq!(format_number(1_234_567.0), "1.23457e+06");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // Exponent after rounding to the requested digits
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Temperature line without a unit suffix.
///
/// Used for the startup values and for slider-driven display values,
/// whatever unit those are in.
pub fn temperature_plain(value: f64) -> String {
    format!("{}{}", TEMPERATURE_PREFIX, format_number(value))
}

/// Temperature line for an edited room, always in °C.
pub fn temperature_celsius(celsius: f64) -> String {
    format!("{}{}°C", TEMPERATURE_PREFIX, format_number(celsius))
}

/// Humidity line.
pub fn humidity(percent: f64) -> String {
    format!("{}{}%", HUMIDITY_PREFIX, format_number(percent))
}

/// Pressure line without a unit suffix (startup and standard-pressure
/// display).
pub fn pressure_plain(value: f64) -> String {
    format!("{}{}", PRESSURE_PREFIX, format_number(value))
}

/// Pressure line for an edited room, always in Pa.
pub fn pressure_pascal(pascal: f64) -> String {
    format!("{}{} Па", PRESSURE_PREFIX, format_number(pascal))
}

/// Airflow line.
pub fn airflow(direction: Option<AirflowDirection>) -> &'static str {
    direction.map_or(AIRFLOW_PLACEHOLDER, |d| d.label())
}

/// Caption of the room's edit button.
pub fn room_title(room: RoomId) -> String {
    format!("Комната {}", room)
}

/// Caption of the power button: it names the action, not the state.
pub fn system_button_caption(state: SystemState) -> &'static str {
    if state.is_on() { "OFF" } else { "ON" }
}

/// The four rendered lines of one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLabels {
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub airflow: String,
}
