//! Whole-recipe helpers
//!
//! Batch conversion of ingredient lists and rewriting of temperatures inside
//! instruction text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::ingredient::{convert_ingredient_measurement, format_quantity};
use super::temperature::{convert_temperature, TemperatureUnit};
use super::units::UnitSystem;

/// "350°F", "350 °F", "350F", "350 degrees F", "180 degrees Celsius", and
/// ranges such as "350-375°F" or "350 to 375 degrees F"
///
/// Groups: 1 first value, 2 range separator, 3 second value, 4 unit after a
/// degree sign or "degrees" (any case), 5 unit letter attached to the number.
/// The attached form only takes an uppercase letter so "1c sugar" stays a cup.
static TEMPERATURE_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(-?\d+(?:\.\d+)?)",
        r"(?:(\s*[-–]\s*|\s+to\s+)(-?\d+(?:\.\d+)?))?",
        r"(?:(?:\s*°\s*|\s+(?i:degrees?)\s+)(?i:(fahrenheit|celsius|f|c))|(F|C))\b",
    ))
    .expect("temperature mention pattern is valid")
});

/// Convert every ingredient line of a recipe
///
/// Order and length are preserved; lines that cannot be converted come back
/// unchanged.
pub fn convert_ingredient_list<S: AsRef<str>>(lines: &[S], to_system: UnitSystem) -> Vec<String> {
    lines
        .iter()
        .map(|line| convert_ingredient_measurement(line.as_ref(), to_system))
        .collect()
}

/// Rewrite temperatures in instruction text into `to`
///
/// Mentions already in `to` are left exactly as written. Converted mentions
/// are rendered as "<degrees>°<C|F>"; both ends of a range are converted and
/// keep their separator ("177-191°C").
pub fn convert_instruction_temperatures(text: &str, to: TemperatureUnit) -> String {
    TEMPERATURE_MENTION
        .replace_all(text, |caps: &Captures| {
            let original = caps[0].to_string();

            let Some(unit) = caps.get(4).or_else(|| caps.get(5)) else {
                return original;
            };
            let Ok(from) = unit.as_str().parse::<TemperatureUnit>() else {
                return original;
            };
            if from == to {
                return original;
            }
            let Ok(low) = caps[1].parse::<f64>() else {
                return original;
            };
            let low = format_quantity(convert_temperature(low, from, to));

            match (caps.get(2), caps.get(3)) {
                (Some(separator), Some(high)) => {
                    let Ok(high) = high.as_str().parse::<f64>() else {
                        return original;
                    };
                    let high = format_quantity(convert_temperature(high, from, to));
                    format!("{}{}{}°{}", low, separator.as_str(), high, to.symbol())
                }
                _ => format!("{}°{}", low, to.symbol()),
            }
        })
        .into_owned()
}
