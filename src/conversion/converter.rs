//! Measurement conversion
//!
//! Converts a value+unit pair into the other measurement system and picks a
//! display unit by magnitude.

use serde::{Deserialize, Serialize};

use super::units::{lookup_unit, UnitDefinition, UnitFamily, UnitSystem};

/// Metric values at or above this switch to liters/kilograms
const METRIC_UPGRADE_THRESHOLD: f64 = 1000.0;
/// Ounces per pound
const OZ_PER_LB: f64 = 16.0;

/// A converted measurement alongside the caller's original input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted magnitude, rounded to one decimal place
    pub value: f64,
    /// Display unit for the converted magnitude (e.g., "ml", "cups")
    pub unit: String,
    /// Value exactly as supplied
    pub original_value: f64,
    /// Unit exactly as supplied (not normalized)
    pub original_unit: String,
}

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a measurement into the requested system
///
/// Returns `None` when there is nothing to do: the unit is already in
/// `to_system`, it is not a recognized unit, or the converted value overflows.
///
/// Display units:
/// - metric volume: "ml", or "liters" from 1000 ml
/// - metric weight: "g", or "kg" from 1000 g
/// - standard volume: "cups" from 1 cup, else "tablespoons" from 1 tbsp, else "teaspoons"
/// - standard weight: "pounds" from 16 oz, else "ounces"
pub fn convert_measurement(value: f64, unit: &str, to_system: UnitSystem) -> Option<ConversionResult> {
    let Some(def) = lookup_unit(unit) else {
        tracing::debug!("Unrecognized unit '{}', skipping conversion", unit);
        return None;
    };

    if def.system == to_system {
        tracing::debug!("Unit '{}' is already {}, skipping conversion", unit, to_system);
        return None;
    }

    let converted = match to_system {
        UnitSystem::Metric => to_metric(value, def),
        UnitSystem::Standard => to_standard(value, def),
    };

    let Some((converted_value, display_unit)) = converted else {
        tracing::debug!("No {} factor for unit '{}'", to_system, unit);
        return None;
    };

    if !converted_value.is_finite() {
        tracing::debug!("Converting {} {} overflowed, skipping conversion", value, unit);
        return None;
    }

    Some(ConversionResult {
        value: round_to_tenth(converted_value),
        unit: display_unit.to_string(),
        original_value: value,
        original_unit: unit.to_string(),
    })
}

fn to_metric(value: f64, def: &UnitDefinition) -> Option<(f64, &'static str)> {
    let base = value * def.factor(def.family.metric_base())?;

    let (small, large) = match def.family {
        UnitFamily::Volume => ("ml", "liters"),
        UnitFamily::Weight => ("g", "kg"),
    };

    if base >= METRIC_UPGRADE_THRESHOLD {
        Some((base / METRIC_UPGRADE_THRESHOLD, large))
    } else {
        Some((base, small))
    }
}

fn to_standard(value: f64, def: &UnitDefinition) -> Option<(f64, &'static str)> {
    match def.family {
        UnitFamily::Volume => {
            let cups = value * def.factor("cup")?;
            if cups >= 1.0 {
                return Some((cups, "cups"));
            }

            let tbsp = value * def.factor("tablespoon")?;
            if tbsp >= 1.0 {
                return Some((tbsp, "tablespoons"));
            }

            Some((value * def.factor("teaspoon")?, "teaspoons"))
        }
        UnitFamily::Weight => {
            let oz = value * def.factor("ounce")?;
            if oz >= OZ_PER_LB {
                Some((oz / OZ_PER_LB, "pounds"))
            } else {
                Some((oz, "ounces"))
            }
        }
    }
}
