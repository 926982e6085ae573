//! Room state, unit conversion and preference persistence for the climate
//! monitor.
//!
//! This crate holds everything the desktop window shows and changes, with no
//! dependency on a UI toolkit:
//!
//! - **Room store**: canonical readings of the three rooms, with a change
//!   subscription ([`RoomStore`])
//! - **Display units**: slider temperature and standard pressure conversion
//!   ([`units`])
//! - **Labels**: the text lines rendered for each room ([`labels`])
//! - **Editing**: pre-filled forms and the commit/cancel exchange ([`editor`])
//! - **Control panel**: slider, unit selection and system power ([`Dashboard`])
//! - **Preferences**: the XML unit preference file ([`SettingsFile`])
//!
//! # Quick Start
//!
//! ```
//! use climate_core::Dashboard;
//! use climate_types::{AirflowDirection, TemperatureUnit};
//!
//! let mut dashboard = Dashboard::new();
//! assert_eq!(dashboard.room_labels(1).unwrap().temperature, "Температура: 10");
//!
//! dashboard.edit_room(2, |mut form| {
//!     form.temperature = "23.5".to_string();
//!     form.airflow = AirflowDirection::RightLeft;
//!     Some(form)
//! })?;
//! assert_eq!(dashboard.room_labels(2)?.temperature, "Температура: 23.5°C");
//!
//! dashboard.set_temperature_unit(TemperatureUnit::Fahrenheit);
//! assert_eq!(dashboard.room_labels(2)?.temperature, "Температура: 32");
//! # Ok::<(), climate_core::Error>(())
//! ```

pub mod dashboard;
pub mod editor;
pub mod error;
pub mod labels;
pub mod settings;
pub mod store;
pub mod units;

// Re-export the value types crate
pub use climate_types;
pub use climate_types::{
    AirflowDirection, PressureUnit, RoomId, RoomReadings, SystemState, TemperatureUnit,
    UnitPreferences,
};

pub use dashboard::Dashboard;
pub use editor::{RoomForm, edit_room};
pub use error::{Error, Result};
pub use labels::RoomLabels;
pub use settings::SettingsFile;
pub use store::{RoomEvent, RoomStore, RoomSubscription};
