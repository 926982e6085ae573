//! Core types for room climate data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Number of monitored rooms. Fixed for the lifetime of the application.
pub const ROOM_COUNT: usize = 3;

/// Identity of one of the three monitored rooms.
///
/// A `RoomId` can only hold `1`, `2` or `3`; construct one with
/// [`RoomId::try_from`] or use the [`RoomId::ALL`] constant.
///
/// ```
/// use climate_types::RoomId;
///
/// assert_eq!(RoomId::try_from(2).unwrap().get(), 2);
/// assert!(RoomId::try_from(0).is_err());
/// assert!(RoomId::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct RoomId(u8);

impl RoomId {
    /// Room 1.
    pub const ONE: RoomId = RoomId(1);
    /// Room 2.
    pub const TWO: RoomId = RoomId(2);
    /// Room 3.
    pub const THREE: RoomId = RoomId(3);

    /// All rooms in index order.
    pub const ALL: [RoomId; ROOM_COUNT] = [RoomId::ONE, RoomId::TWO, RoomId::THREE];

    /// The 1-based room number.
    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// The 0-based slot used for array storage.
    #[must_use]
    pub fn slot(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl TryFrom<usize> for RoomId {
    type Error = ParseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1..=ROOM_COUNT => Ok(RoomId(value as u8)),
            _ => Err(ParseError::InvalidRoomIndex(value)),
        }
    }
}

impl From<RoomId> for usize {
    fn from(room: RoomId) -> Self {
        room.get()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vent routing for a room.
///
/// `Display` gives the English name; [`AirflowDirection::label`] gives the
/// text shown in the window and the edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirflowDirection {
    /// Up, then right, then left.
    UpRightLeft,
    /// Down on all three vents.
    DownDownDown,
    /// Right, then left.
    RightLeft,
}

impl AirflowDirection {
    /// All directions in dialog order.
    pub const ALL: [AirflowDirection; 3] = [
        AirflowDirection::UpRightLeft,
        AirflowDirection::DownDownDown,
        AirflowDirection::RightLeft,
    ];

    /// Label shown by the user interface.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AirflowDirection::UpRightLeft => "Вверх-Право-Лево",
            AirflowDirection::DownDownDown => "Вниз-Вниз-Вниз",
            AirflowDirection::RightLeft => "Право-Лево",
        }
    }

    /// English name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AirflowDirection::UpRightLeft => "Up-Right-Left",
            AirflowDirection::DownDownDown => "Down-Down-Down",
            AirflowDirection::RightLeft => "Right-Left",
        }
    }
}

impl fmt::Display for AirflowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AirflowDirection {
    type Err = ParseError;

    /// Accepts either the English name (case-insensitive) or the UI label.
    ///
    /// ```
    /// use climate_types::AirflowDirection;
    ///
    /// assert_eq!("Right-Left".parse::<AirflowDirection>(), Ok(AirflowDirection::RightLeft));
    /// assert_eq!("Вниз-Вниз-Вниз".parse::<AirflowDirection>(), Ok(AirflowDirection::DownDownDown));
    /// assert!("Sideways".parse::<AirflowDirection>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s) || d.label() == s)
            .ok_or_else(|| ParseError::UnknownAirflow(s.to_string()))
    }
}

/// Parameters of one room in canonical units.
///
/// Temperature is stored in Celsius and pressure in Pascals no matter which
/// display units are selected. Values are not range checked: humidity may
/// exceed 100 and pressure may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomReadings {
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Pressure in Pa.
    pub pressure: f64,
    /// Airflow direction, `None` until the room has been edited.
    pub airflow: Option<AirflowDirection>,
}

impl RoomReadings {
    /// Build readings from the four parameters.
    #[must_use]
    pub fn new(
        temperature: f64,
        humidity: f64,
        pressure: f64,
        airflow: Option<AirflowDirection>,
    ) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
            airflow,
        }
    }

    /// Hardcoded values a room starts with.
    ///
    /// ```
    /// use climate_types::{RoomId, RoomReadings};
    ///
    /// let room2 = RoomReadings::startup(RoomId::TWO);
    /// assert_eq!(room2.temperature, 20.0);
    /// assert_eq!(room2.pressure, 102_000.0);
    /// assert_eq!(room2.airflow, None);
    /// ```
    #[must_use]
    pub fn startup(room: RoomId) -> Self {
        match room.get() {
            1 => Self::new(10.0, 10.0, 100_000.0, None),
            2 => Self::new(20.0, 20.0, 102_000.0, None),
            _ => Self::new(30.0, 30.0, 103_000.0, None),
        }
    }
}

/// Air-conditioning system power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SystemState {
    /// System is off (initial state).
    #[default]
    Off,
    /// System is running.
    On,
}

impl SystemState {
    /// Flip the state in place and return the new value.
    pub fn toggle(&mut self) -> SystemState {
        *self = match self {
            SystemState::Off => SystemState::On,
            SystemState::On => SystemState::Off,
        };
        *self
    }

    /// Whether the system is running.
    #[must_use]
    pub fn is_on(&self) -> bool {
        matches!(self, SystemState::On)
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemState::Off => write!(f, "off"),
            SystemState::On => write!(f, "on"),
        }
    }
}

/// Temperature display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius (default).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "°C"))]
    Celsius,
    /// Degrees Fahrenheit.
    #[cfg_attr(feature = "serde", serde(rename = "°F"))]
    Fahrenheit,
    /// Kelvin.
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    Kelvin,
}

impl TemperatureUnit {
    /// All units in combo box order.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Unit symbol, also used as the persisted token.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseError;

    /// Accepts the symbol or the English unit name (case-insensitive).
    ///
    /// ```
    /// use climate_types::TemperatureUnit;
    ///
    /// assert_eq!("°F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
    /// assert_eq!("kelvin".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "°C" => Ok(TemperatureUnit::Celsius),
            "°F" => Ok(TemperatureUnit::Fahrenheit),
            "K" => Ok(TemperatureUnit::Kelvin),
            other => match other.to_ascii_lowercase().as_str() {
                "c" | "celsius" => Ok(TemperatureUnit::Celsius),
                "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
                "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
                _ => Err(ParseError::UnknownUnit(other.to_string())),
            },
        }
    }
}

/// Pressure display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    /// Pascals (default).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Pa"))]
    Pascal,
    /// Millimetres of mercury.
    #[cfg_attr(feature = "serde", serde(rename = "mmHg"))]
    MmHg,
}

impl PressureUnit {
    /// All units in combo box order.
    pub const ALL: [PressureUnit; 2] = [PressureUnit::Pascal, PressureUnit::MmHg];

    /// Persisted token.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::MmHg => "mmHg",
        }
    }

    /// Label shown in the unit combo box.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Па",
            PressureUnit::MmHg => "мм.рт.ст.",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PressureUnit {
    type Err = ParseError;

    /// Accepts the persisted token (case-insensitive) or the combo label.
    ///
    /// ```
    /// use climate_types::PressureUnit;
    ///
    /// assert_eq!("mmHg".parse::<PressureUnit>(), Ok(PressureUnit::MmHg));
    /// assert_eq!("Па".parse::<PressureUnit>(), Ok(PressureUnit::Pascal));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PressureUnit::ALL
            .into_iter()
            .find(|u| u.token().eq_ignore_ascii_case(s) || u.label() == s)
            .ok_or_else(|| ParseError::UnknownUnit(s.to_string()))
    }
}

/// Process-wide display unit selection, persisted across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitPreferences {
    /// Selected temperature unit.
    pub temperature_unit: TemperatureUnit,
    /// Selected pressure unit.
    pub pressure_unit: PressureUnit,
}

impl UnitPreferences {
    /// Build a preference pair.
    #[must_use]
    pub fn new(temperature_unit: TemperatureUnit, pressure_unit: PressureUnit) -> Self {
        Self {
            temperature_unit,
            pressure_unit,
        }
    }
}
