//! Display unit conversion.
//!
//! Pure functions from canonical values to the numbers shown for the
//! selected display unit. Nothing here is written back into the store.

use climate_types::{PressureUnit, TemperatureUnit};

/// Standard atmosphere in Pascals. The pressure display always starts from
/// this constant, never from a room's own pressure.
pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;

/// Pascals in one millimetre of mercury.
pub const PA_PER_MMHG: f64 = 133.322;

/// Upper end of the temperature slider (lower end is 0).
pub const SLIDER_MAX: u8 = 100;

/// Convert Celsius to Fahrenheit.
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert Celsius to Kelvin.
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

/// Convert a raw slider position (degrees Celsius) into the display unit.
///
/// The value is always recomputed from the slider position, so switching
/// units back and forth never accumulates rounding error. Positions above
/// [`SLIDER_MAX`] are clamped.
///
/// ```
/// use climate_core::units::to_display_temperature;
/// use climate_types::TemperatureUnit;
///
/// assert_eq!(to_display_temperature(0, TemperatureUnit::Celsius), 0.0);
/// assert_eq!(to_display_temperature(100, TemperatureUnit::Fahrenheit), 212.0);
/// assert_eq!(to_display_temperature(0, TemperatureUnit::Kelvin), 273.15);
/// ```
pub fn to_display_temperature(slider: u8, unit: TemperatureUnit) -> f64 {
    let celsius = f64::from(slider.min(SLIDER_MAX));
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        TemperatureUnit::Kelvin => celsius_to_kelvin(celsius),
    }
}

/// Standard atmospheric pressure expressed in the display unit.
///
/// ```
/// use climate_core::units::to_display_pressure;
/// use climate_types::PressureUnit;
///
/// assert_eq!(to_display_pressure(PressureUnit::Pascal), 101_325.0);
/// assert!((to_display_pressure(PressureUnit::MmHg) - 760.0).abs() < 0.01);
/// ```
pub fn to_display_pressure(unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => STANDARD_ATMOSPHERE_PA,
        PressureUnit::MmHg => STANDARD_ATMOSPHERE_PA / PA_PER_MMHG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_identity() {
        assert_eq!(to_display_temperature(0, TemperatureUnit::Celsius), 0.0);
        assert_eq!(to_display_temperature(37, TemperatureUnit::Celsius), 37.0);
        assert_eq!(to_display_temperature(100, TemperatureUnit::Celsius), 100.0);
    }

    #[test]
    fn test_fahrenheit() {
        assert_eq!(to_display_temperature(0, TemperatureUnit::Fahrenheit), 32.0);
        assert_eq!(to_display_temperature(100, TemperatureUnit::Fahrenheit), 212.0);
        assert_eq!(to_display_temperature(20, TemperatureUnit::Fahrenheit), 68.0);
    }

    #[test]
    fn test_kelvin() {
        assert_eq!(to_display_temperature(0, TemperatureUnit::Kelvin), 273.15);
        assert!((to_display_temperature(100, TemperatureUnit::Kelvin) - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_slider_clamped_to_max() {
        assert_eq!(to_display_temperature(250, TemperatureUnit::Celsius), 100.0);
        assert_eq!(to_display_temperature(101, TemperatureUnit::Fahrenheit), 212.0);
    }

    #[test]
    fn test_pressure_pascal_is_standard_atmosphere() {
        assert_eq!(to_display_pressure(PressureUnit::Pascal), 101_325.0);
    }

    #[test]
    fn test_pressure_mmhg() {
        let mmhg = to_display_pressure(PressureUnit::MmHg);
        assert_eq!(mmhg, 101_325.0 / 133.322);
        assert!((mmhg - 760.002_1).abs() < 1e-4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fahrenheit_is_linear_in_slider(v in 0u8..=100) {
                let f = to_display_temperature(v, TemperatureUnit::Fahrenheit);
                prop_assert!((f - (f64::from(v) * 1.8 + 32.0)).abs() < 1e-9);
            }

            #[test]
            fn kelvin_offset_is_constant(v in 0u8..=100) {
                let k = to_display_temperature(v, TemperatureUnit::Kelvin);
                let c = to_display_temperature(v, TemperatureUnit::Celsius);
                prop_assert!((k - c - 273.15).abs() < 1e-9);
            }
        }
    }
}
