//! Integration tests for climate-core
//!
//! These drive the same sequences the window does: startup, edits, unit
//! changes and the preference file round trip at shutdown and next start.

use climate_core::settings::SettingsFile;
use climate_core::{Dashboard, Error, RoomEvent, RoomStore};
use climate_types::{
    AirflowDirection, PressureUnit, RoomId, RoomReadings, TemperatureUnit, UnitPreferences,
};
use tempfile::TempDir;

/// Route library logs to the test harness output; `RUST_LOG` narrows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .try_init();
}

// =============================================================================
// Window session flows
// =============================================================================

#[test]
fn test_fresh_start_matches_startup_defaults() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let file = SettingsFile::new(dir.path().join("settings.xml"));

    let mut dashboard = Dashboard::new();
    dashboard.apply_preferences(file.load_or_default());

    let labels = dashboard.room_labels(3).unwrap();
    assert_eq!(labels.temperature, "Температура: 30");
    assert_eq!(labels.humidity, "Влажность: 30%");
    assert_eq!(labels.pressure, "Давление: 103000");
    assert_eq!(labels.airflow, "Направление подачи воздуха");
}

#[test]
fn test_edit_every_room_then_change_units() {
    init_tracing();
    let mut dashboard = Dashboard::new();

    for (index, direction) in (1..=3).zip(AirflowDirection::ALL) {
        dashboard
            .edit_room(index, |mut form| {
                form.temperature = format!("{}", 20 + index);
                form.humidity = "50".into();
                form.pressure = "100500".into();
                form.airflow = direction;
                Some(form)
            })
            .unwrap();
    }

    assert_eq!(
        dashboard.store().get_room(2).unwrap(),
        RoomReadings::new(22.0, 50.0, 100_500.0, Some(AirflowDirection::DownDownDown))
    );
    assert_eq!(
        dashboard.room_labels(1).unwrap().temperature,
        "Температура: 21°C"
    );

    dashboard.set_pressure_unit(PressureUnit::MmHg);
    let standard = "Давление: 760.002";
    for index in 1..=3 {
        let labels = dashboard.room_labels(index).unwrap();
        assert_eq!(labels.pressure, standard);
        assert_eq!(labels.humidity, "Влажность: 50%");
    }

    // Editing again restores that room's own pressure line
    dashboard.edit_room(3, Some).unwrap();
    assert_eq!(
        dashboard.room_labels(3).unwrap().pressure,
        "Давление: 100500 Па"
    );
    assert_eq!(dashboard.room_labels(2).unwrap().pressure, standard);
}

#[test]
fn test_unit_changes_never_touch_stored_readings() {
    init_tracing();
    let mut dashboard = Dashboard::new();
    let before: Vec<RoomReadings> = dashboard.store().rooms().map(|(_, r)| *r).collect();

    dashboard.move_slider(55);
    dashboard.set_temperature_unit(TemperatureUnit::Kelvin);
    dashboard.set_pressure_unit(PressureUnit::MmHg);
    dashboard.set_temperature_unit(TemperatureUnit::Celsius);

    let after: Vec<RoomReadings> = dashboard.store().rooms().map(|(_, r)| *r).collect();
    assert_eq!(before, after);
    assert_eq!(
        dashboard.room_labels(1).unwrap().temperature,
        "Температура: 55"
    );
}

#[test]
fn test_garbage_input_commits_zero() {
    init_tracing();
    let mut dashboard = Dashboard::new();
    let mut form = dashboard.open_editor(1).unwrap();
    form.temperature = "twenty".into();
    dashboard.commit_edit(1, &form).unwrap();

    assert_eq!(dashboard.store().get_room(1).unwrap().temperature, 0.0);
    assert_eq!(
        dashboard.room_labels(1).unwrap().temperature,
        "Температура: 0°C"
    );
}

#[test]
fn test_invalid_room_index_is_reported() {
    init_tracing();
    let mut dashboard = Dashboard::new();
    let err = dashboard.edit_room(4, Some).unwrap_err();
    assert!(matches!(err, Error::InvalidIndex(4)));
    assert_eq!(err.to_string(), "Invalid room index 4: expected 1, 2 or 3");
}

#[test]
fn test_edited_values_show_six_significant_digits() {
    init_tracing();
    let mut dashboard = Dashboard::new();
    dashboard
        .edit_room(1, |mut form| {
            form.temperature = "21.123456789".into();
            form.pressure = "98765432".into();
            Some(form)
        })
        .unwrap();

    let labels = dashboard.room_labels(1).unwrap();
    assert_eq!(labels.temperature, "Температура: 21.1235°C");
    assert_eq!(labels.pressure, "Давление: 9.87654e+07 Па");

    // The dialog reopens on the stored value, not the rounded label
    let form = dashboard.open_editor(1).unwrap();
    assert_eq!(form.temperature, "21.123456789");
    assert_eq!(form.pressure, "98765432");
}

// =============================================================================
// Store subscription
// =============================================================================

#[test]
fn test_external_subscriber_sees_each_update_once() {
    init_tracing();
    let mut store = RoomStore::new();
    let mut subscription = store.subscribe();

    let readings = RoomReadings::new(19.0, 40.0, 101_000.0, Some(AirflowDirection::UpRightLeft));
    store.set_room(1, readings).unwrap();
    store.set_room(3, readings).unwrap();

    let rooms: Vec<RoomId> = subscription
        .drain(&store)
        .iter()
        .map(RoomEvent::room)
        .collect();
    assert_eq!(rooms, vec![RoomId::ONE, RoomId::THREE]);
    assert!(subscription.drain(&store).is_empty());
}

// =============================================================================
// Preference persistence across sessions
// =============================================================================

#[test]
fn test_preferences_survive_restart() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let file = SettingsFile::new(dir.path().join("climate").join("settings.xml"));

    let mut first = Dashboard::new();
    first.set_temperature_unit(TemperatureUnit::Fahrenheit);
    first.set_pressure_unit(PressureUnit::MmHg);
    file.save(&first.preferences()).unwrap();

    let mut second = Dashboard::new();
    second.apply_preferences(file.load_or_default());
    assert_eq!(
        second.preferences(),
        UnitPreferences::new(TemperatureUnit::Fahrenheit, PressureUnit::MmHg)
    );
    // A restored non-default unit relabels like a user selection
    assert_eq!(
        second.room_labels(2).unwrap().temperature,
        "Температура: 32"
    );
}

#[test]
fn test_corrupt_preferences_fall_back_to_defaults() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.xml");
    std::fs::write(&path, "not a settings document <").unwrap();

    let mut dashboard = Dashboard::new();
    dashboard.apply_preferences(SettingsFile::new(&path).load_or_default());
    assert_eq!(dashboard.preferences(), UnitPreferences::default());
    assert_eq!(
        dashboard.room_labels(1).unwrap().pressure,
        "Давление: 100000"
    );
}
