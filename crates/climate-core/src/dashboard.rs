//! Control panel state.
//!
//! [`Dashboard`] owns the [`RoomStore`] together with everything the control
//! column changes: the slider position, the selected display units and the
//! system power state. Rendering is a pure projection: [`Dashboard::room_labels`]
//! derives the lines of a room from the stored readings and from which source
//! last wrote each line.
//!
//! A line's source changes in two ways:
//!
//! - a committed edit switches that room's temperature and pressure lines to
//!   the edited projection (fixed °C / Па suffixes);
//! - a slider move or temperature unit change switches every room's
//!   temperature line to the slider display, and a pressure unit change
//!   switches every room's pressure line to the standard-pressure display.

use tracing::debug;

use climate_types::{
    PressureUnit, ROOM_COUNT, RoomId, RoomReadings, SystemState, TemperatureUnit, UnitPreferences,
};

use crate::editor::{self, RoomForm};
use crate::error::Result;
use crate::labels::{self, RoomLabels};
use crate::store::{RoomStore, RoomSubscription, room_id};
use crate::units::{SLIDER_MAX, to_display_pressure, to_display_temperature};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureLine {
    Startup,
    Edited,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressureLine {
    Startup,
    Edited,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSources {
    temperature: TemperatureLine,
    pressure: PressureLine,
}

impl LineSources {
    const STARTUP: LineSources = LineSources {
        temperature: TemperatureLine::Startup,
        pressure: PressureLine::Startup,
    };
}

/// State behind the main window.
#[derive(Debug)]
pub struct Dashboard {
    store: RoomStore,
    subscription: RoomSubscription,
    slider: u8,
    units: UnitPreferences,
    system: SystemState,
    sources: [LineSources; ROOM_COUNT],
}

impl Dashboard {
    /// Dashboard over a store holding the startup defaults.
    pub fn new() -> Self {
        Self::with_store(RoomStore::new())
    }

    /// Dashboard over an existing store. Every room starts with its startup
    /// lines, whatever the store holds.
    pub fn with_store(store: RoomStore) -> Self {
        let subscription = store.subscribe();
        Self {
            store,
            subscription,
            slider: 0,
            units: UnitPreferences::default(),
            system: SystemState::default(),
            sources: [LineSources::STARTUP; ROOM_COUNT],
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &RoomStore {
        &self.store
    }

    /// Current slider position in `0..=100`.
    pub fn slider(&self) -> u8 {
        self.slider
    }

    /// Current display units.
    pub fn preferences(&self) -> UnitPreferences {
        self.units
    }

    /// Current power state of the air conditioning system.
    pub fn system_state(&self) -> SystemState {
        self.system
    }

    /// Move the temperature slider.
    ///
    /// Every room's temperature line shows the slider value converted to the
    /// selected unit afterwards.
    pub fn move_slider(&mut self, value: u8) {
        self.slider = value.min(SLIDER_MAX);
        self.override_temperature();
    }

    /// Select the temperature display unit. Selecting the active unit does
    /// nothing.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        if self.units.temperature_unit == unit {
            return;
        }
        debug!("Temperature unit {} -> {}", self.units.temperature_unit, unit);
        self.units.temperature_unit = unit;
        self.override_temperature();
    }

    /// Select the pressure display unit. Selecting the active unit does
    /// nothing.
    pub fn set_pressure_unit(&mut self, unit: PressureUnit) {
        if self.units.pressure_unit == unit {
            return;
        }
        debug!("Pressure unit {} -> {}", self.units.pressure_unit, unit);
        self.units.pressure_unit = unit;
        for sources in &mut self.sources {
            sources.pressure = PressureLine::Standard;
        }
    }

    /// Apply loaded preferences as if the user had picked both units.
    pub fn apply_preferences(&mut self, prefs: UnitPreferences) {
        self.set_temperature_unit(prefs.temperature_unit);
        self.set_pressure_unit(prefs.pressure_unit);
    }

    /// Flip the system power state and return the new state.
    pub fn toggle_system(&mut self) -> SystemState {
        let state = self.system.toggle();
        debug!("System turned {}", state);
        state
    }

    /// Pre-filled edit form for a room, in canonical units.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when `index` is not 1, 2 or 3.
    pub fn open_editor(&self, index: usize) -> Result<RoomForm> {
        let room = room_id(index)?;
        Ok(RoomForm::from_readings(room, self.store.room(room)))
    }

    /// Commit a confirmed form for a room.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when `index` is not 1, 2 or 3.
    pub fn commit_edit(&mut self, index: usize, form: &RoomForm) -> Result<RoomReadings> {
        let readings = form.to_readings();
        self.store.set_room(index, readings)?;
        self.sync();
        Ok(readings)
    }

    /// Run the whole edit exchange for a room through `prompt`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when `index` is not 1, 2 or 3.
    pub fn edit_room<F>(&mut self, index: usize, prompt: F) -> Result<Option<RoomReadings>>
    where
        F: FnOnce(RoomForm) -> Option<RoomForm>,
    {
        let committed = editor::edit_room(&mut self.store, index, prompt)?;
        self.sync();
        Ok(committed)
    }

    /// The four lines shown for a room.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when `index` is not 1, 2 or 3.
    pub fn room_labels(&self, index: usize) -> Result<RoomLabels> {
        let room = room_id(index)?;
        Ok(self.labels_for(room))
    }

    /// Lines of a known room.
    pub fn labels_for(&self, room: RoomId) -> RoomLabels {
        let readings = self.store.room(room);
        let sources = self.sources[room.slot()];

        let temperature = match sources.temperature {
            TemperatureLine::Startup => labels::temperature_plain(readings.temperature),
            TemperatureLine::Edited => labels::temperature_celsius(readings.temperature),
            TemperatureLine::Slider => labels::temperature_plain(to_display_temperature(
                self.slider,
                self.units.temperature_unit,
            )),
        };
        let pressure = match sources.pressure {
            PressureLine::Startup => labels::pressure_plain(readings.pressure),
            PressureLine::Edited => labels::pressure_pascal(readings.pressure),
            PressureLine::Standard => {
                labels::pressure_plain(to_display_pressure(self.units.pressure_unit))
            }
        };

        RoomLabels {
            temperature,
            humidity: labels::humidity(readings.humidity),
            pressure,
            airflow: labels::airflow(readings.airflow).to_string(),
        }
    }

    fn override_temperature(&mut self) {
        for sources in &mut self.sources {
            sources.temperature = TemperatureLine::Slider;
        }
    }

    /// Switch rooms updated in the store to their edited lines.
    ///
    /// Runs after every write, so the subscription never lags here.
    fn sync(&mut self) {
        for event in self.subscription.drain(&self.store) {
            self.sources[event.room().slot()] = LineSources {
                temperature: TemperatureLine::Edited,
                pressure: PressureLine::Edited,
            };
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
