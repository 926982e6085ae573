//! Platform-agnostic types for the three-room climate monitor.
//!
//! This crate provides the value types shared by the domain logic
//! (climate-core) and the desktop window (climate-gui).
//!
//! # Features
//!
//! - Fixed room identities ([`RoomId`]) and per-room readings
//! - Airflow directions with their display labels
//! - Temperature and pressure display units
//! - Air-conditioning power state
//! - Error types for parsing
//!
//! # Example
//!
//! ```
//! use climate_types::{RoomId, RoomReadings, TemperatureUnit};
//!
//! let room = RoomId::try_from(1).unwrap();
//! let readings = RoomReadings::startup(room);
//! assert_eq!(readings.humidity, 10.0);
//! assert_eq!("K".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{
    AirflowDirection, PressureUnit, ROOM_COUNT, RoomId, RoomReadings, SystemState,
    TemperatureUnit, UnitPreferences,
};
