//! Temperature conversion
//!
//! Oven and stovetop temperatures are converted between Celsius and Fahrenheit
//! and rounded to whole degrees.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ParseResult};

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C", alias = "c")]
    Celsius,
    #[serde(rename = "F", alias = "f")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Single-letter symbol ("C" or "F")
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(ConversionError::UnknownTemperatureUnit(s.to_string())),
        }
    }
}

/// Convert a temperature between Celsius and Fahrenheit
///
/// Converted values are rounded to the nearest whole degree. Converting to the
/// same scale returns the value untouched.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
            ((value - 32.0) * 5.0 / 9.0).round()
        }
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
            (value * 9.0 / 5.0 + 32.0).round()
        }
        _ => value,
    }
}

/// Convert a temperature given free-form unit names
///
/// Returns `value` unchanged when either unit is not "C"/"F".
pub fn convert_temperature_str(value: f64, from: &str, to: &str) -> f64 {
    match (from.parse::<TemperatureUnit>(), to.parse::<TemperatureUnit>()) {
        (Ok(from), Ok(to)) => convert_temperature(value, from, to),
        _ => {
            tracing::debug!("Temperature units '{}' -> '{}' not supported, leaving {}", from, to, value);
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::{Celsius, Fahrenheit};

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(convert_temperature(212.0, Fahrenheit, Celsius), 100.0);
        assert_eq!(convert_temperature(32.0, Fahrenheit, Celsius), 0.0);
        // 350F = 176.67C
        assert_eq!(convert_temperature(350.0, Fahrenheit, Celsius), 177.0);
        assert_eq!(convert_temperature(-40.0, Fahrenheit, Celsius), -40.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
        // 180C = 356F
        assert_eq!(convert_temperature(180.0, Celsius, Fahrenheit), 356.0);
        // 37.5C = 99.5F, rounds away from zero
        assert_eq!(convert_temperature(37.5, Celsius, Fahrenheit), 100.0);
    }

    #[test]
    fn test_round_trip() {
        for v in [32.0, 212.0] {
            let c = convert_temperature(v, Fahrenheit, Celsius);
            assert_eq!(convert_temperature(c, Celsius, Fahrenheit), v);
        }
    }

    #[test]
    fn test_identity_is_not_rounded() {
        assert_eq!(convert_temperature(21.7, Celsius, Celsius), 21.7);
        assert_eq!(convert_temperature(-3.25, Fahrenheit, Fahrenheit), -3.25);
    }

    #[test]
    fn test_string_variant_falls_back() {
        assert_eq!(convert_temperature_str(212.0, "F", "c"), 100.0);
        assert_eq!(convert_temperature_str(300.0, "K", "C"), 300.0);
        assert_eq!(convert_temperature_str(300.0, "F", "gas mark"), 300.0);
    }

    #[test]
    fn test_parse_temperature_unit() {
        assert_eq!("celsius".parse::<TemperatureUnit>(), Ok(Celsius));
        assert_eq!("F".parse::<TemperatureUnit>(), Ok(Fahrenheit));
        assert_eq!(
            "K".parse::<TemperatureUnit>(),
            Err(ConversionError::UnknownTemperatureUnit("K".to_string()))
        );
        assert_eq!(Fahrenheit.to_string(), "F");
    }
}
