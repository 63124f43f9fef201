//! Server configuration
//!
//! Read once from the environment at startup.

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use crate::conversion::{TemperatureUnit, UnitSystem};

/// Target system used when a tool call omits `to_system`
pub const DEFAULT_SYSTEM_VAR: &str = "LADLE_DEFAULT_SYSTEM";
/// Target temperature unit used when a tool call omits `to`
pub const DEFAULT_TEMPERATURE_VAR: &str = "LADLE_DEFAULT_TEMPERATURE";

/// Runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config {
    pub default_system: UnitSystem,
    pub default_temperature: TemperatureUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_system: UnitSystem::Metric,
            default_temperature: TemperatureUnit::Celsius,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset variables use the defaults; unparseable values are logged and
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            default_system: parse_or_default(
                DEFAULT_SYSTEM_VAR,
                lookup(DEFAULT_SYSTEM_VAR),
                defaults.default_system,
            ),
            default_temperature: parse_or_default(
                DEFAULT_TEMPERATURE_VAR,
                lookup(DEFAULT_TEMPERATURE_VAR),
                defaults.default_temperature,
            ),
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}='{}': {}", key, raw, e);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            (DEFAULT_SYSTEM_VAR, "standard"),
            (DEFAULT_TEMPERATURE_VAR, "F"),
        ]);
        assert_eq!(config.default_system, UnitSystem::Standard);
        assert_eq!(config.default_temperature, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[
            (DEFAULT_SYSTEM_VAR, "cubits"),
            (DEFAULT_TEMPERATURE_VAR, "kelvin"),
        ]);
        assert_eq!(config, Config::default());
    }
}
