//! Room edit protocol.
//!
//! Editing is a synchronous request/response exchange: the caller gets a
//! [`RoomForm`] pre-filled from the room's canonical values, the user changes
//! it, and the result is either a confirmed form (committed to the store) or
//! `None` (cancelled, nothing changes).
//!
//! The form always works in canonical units (°C and Pa) regardless of the
//! display units currently selected. Buffers hold the exact stored value,
//! not the 6-digit label text, so saving an untouched form changes nothing.

use tracing::debug;

use climate_types::{AirflowDirection, RoomId, RoomReadings};

use crate::error::Result;
use crate::store::{RoomStore, room_id};

/// Text buffers of the edit dialog for one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomForm {
    pub room: RoomId,
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub airflow: AirflowDirection,
}

impl RoomForm {
    /// Pre-fill a form from stored readings.
    ///
    /// A room that was never edited has no airflow direction; the form then
    /// preselects the first direction in the list.
    pub fn from_readings(room: RoomId, readings: &RoomReadings) -> Self {
        Self {
            room,
            temperature: readings.temperature.to_string(),
            humidity: readings.humidity.to_string(),
            pressure: readings.pressure.to_string(),
            airflow: readings.airflow.unwrap_or(AirflowDirection::ALL[0]),
        }
    }

    /// Read the buffers back as readings.
    ///
    /// Text that is not a number becomes `0`. Values are not range checked.
    pub fn to_readings(&self) -> RoomReadings {
        RoomReadings::new(
            parse_number(&self.temperature),
            parse_number(&self.humidity),
            parse_number(&self.pressure),
            Some(self.airflow),
        )
    }
}

/// Parse a decimal number, falling back to `0.0` for anything unparsable.
///
/// ```
/// use climate_core::editor::parse_number;
///
/// assert_eq!(parse_number(" 21.5 "), 21.5);
/// assert_eq!(parse_number("abc"), 0.0);
/// assert_eq!(parse_number(""), 0.0);
/// ```
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or_else(|_| {
        debug!("Unparsable number {:?}, using 0", text);
        0.0
    })
}

/// Open a form for `index`, hand it to `prompt`, and commit the answer.
///
/// Returns the committed readings, or `None` if the prompt was cancelled.
///
/// # Errors
///
/// [`crate::Error::InvalidIndex`] when `index` is not 1, 2 or 3; the prompt
/// is not called in that case.
pub fn edit_room<F>(store: &mut RoomStore, index: usize, prompt: F) -> Result<Option<RoomReadings>>
where
    F: FnOnce(RoomForm) -> Option<RoomForm>,
{
    let room = room_id(index)?;
    let form = RoomForm::from_readings(room, store.room(room));

    let Some(answer) = prompt(form) else {
        debug!("Edit of room {} cancelled", room);
        return Ok(None);
    };

    let readings = answer.to_readings();
    store.set_room(room.get(), readings)?;
    Ok(Some(readings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_form_prefills_canonical_values() {
        let store = RoomStore::new();
        let form = RoomForm::from_readings(RoomId::ONE, store.room(RoomId::ONE));
        assert_eq!(form.temperature, "10");
        assert_eq!(form.humidity, "10");
        assert_eq!(form.pressure, "100000");
        assert_eq!(form.airflow, AirflowDirection::UpRightLeft);
    }

    #[test]
    fn test_room_three_prefills_its_own_pressure() {
        let store = RoomStore::new();
        let form = RoomForm::from_readings(RoomId::THREE, store.room(RoomId::THREE));
        assert_eq!(form.pressure, "103000");
    }

    #[test]
    fn test_form_keeps_existing_airflow() {
        let readings = RoomReadings::new(1.0, 2.0, 3.0, Some(AirflowDirection::RightLeft));
        let form = RoomForm::from_readings(RoomId::TWO, &readings);
        assert_eq!(form.airflow, AirflowDirection::RightLeft);
    }

    #[test]
    fn test_to_readings_parses_buffers() {
        let form = RoomForm {
            room: RoomId::ONE,
            temperature: "22.5".into(),
            humidity: " 48 ".into(),
            pressure: "99000".into(),
            airflow: AirflowDirection::DownDownDown,
        };
        assert_eq!(
            form.to_readings(),
            RoomReadings::new(22.5, 48.0, 99_000.0, Some(AirflowDirection::DownDownDown))
        );
    }

    #[test]
    fn test_garbage_text_becomes_zero() {
        let form = RoomForm {
            room: RoomId::ONE,
            temperature: "warm".into(),
            humidity: "22,5".into(),
            pressure: String::new(),
            airflow: AirflowDirection::UpRightLeft,
        };
        let readings = form.to_readings();
        assert_eq!(readings.temperature, 0.0);
        assert_eq!(readings.humidity, 0.0);
        assert_eq!(readings.pressure, 0.0);
    }

    #[test]
    fn test_edit_room_commits_confirmed_form() {
        let mut store = RoomStore::new();
        let result = edit_room(&mut store, 2, |mut form| {
            form.temperature = "18".into();
            form.airflow = AirflowDirection::RightLeft;
            Some(form)
        })
        .unwrap();

        let expected = RoomReadings::new(18.0, 20.0, 102_000.0, Some(AirflowDirection::RightLeft));
        assert_eq!(result, Some(expected));
        assert_eq!(store.get_room(2).unwrap(), expected);
    }

    #[test]
    fn test_edit_room_cancel_leaves_store() {
        let mut store = RoomStore::new();
        let result = edit_room(&mut store, 1, |_| None).unwrap();
        assert_eq!(result, None);
        assert_eq!(store.get_room(1).unwrap(), RoomReadings::startup(RoomId::ONE));
    }

    #[test]
    fn test_edit_room_invalid_index_skips_prompt() {
        let mut store = RoomStore::new();
        let mut called = false;
        let result = edit_room(&mut store, 0, |form| {
            called = true;
            Some(form)
        });
        assert!(matches!(result, Err(Error::InvalidIndex(0))));
        assert!(!called);
    }

    #[test]
    fn test_untouched_form_stores_preselected_airflow() {
        let mut store = RoomStore::new();
        let readings = edit_room(&mut store, 3, Some).unwrap().unwrap();
        assert_eq!(readings.airflow, Some(AirflowDirection::UpRightLeft));
        assert_eq!(readings.pressure, 103_000.0);
    }

    #[test]
    fn test_form_keeps_digits_hidden_by_labels() {
        let mut store = RoomStore::new();
        let precise = RoomReadings::new(0.123_456_7, 10.0, 1_234_567.0, None);
        store.set_room(1, precise).unwrap();

        let form = RoomForm::from_readings(RoomId::ONE, store.room(RoomId::ONE));
        assert_eq!(form.temperature, "0.1234567");
        assert_eq!(form.pressure, "1234567");

        let saved = edit_room(&mut store, 1, Some).unwrap().unwrap();
        assert_eq!(saved.temperature, 0.123_456_7);
        assert_eq!(saved.pressure, 1_234_567.0);
    }
}
