//! Ingredient line conversion
//!
//! Finds the leading quantity and unit of an ingredient line ("2 cups flour"),
//! converts it, and splices the result back in front of the untouched rest of
//! the line.

use std::sync::LazyLock;

use regex::Regex;

use super::converter::convert_measurement;
use super::units::{is_known_unit, UnitSystem};

/// Leading quantity (integer, decimal, or a/b) followed by one or two words
static LEADING_MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?(?:/\d+)?)\s+([a-zA-Z]+)(\s+[a-zA-Z]+)?")
        .expect("leading measurement pattern is valid")
});

/// The quantity and unit found at the start of an ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct LeadingMeasurement<'a> {
    /// Parsed numeric quantity
    pub quantity: f64,
    /// Unit text as written (one or two words)
    pub unit: &'a str,
    /// The "<quantity> <unit>" prefix that gets replaced
    pub matched: &'a str,
}

/// Parse a quantity token: an integer, a decimal, or a simple fraction "a/b"
///
/// Mixed numbers ("1 1/2") are not supported. Returns `None` for a zero
/// denominator or anything that does not parse.
pub fn parse_quantity(token: &str) -> Option<f64> {
    let value = match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().ok()?;
            let denominator: f64 = denominator.trim().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => token.trim().parse().ok()?,
    };

    value.is_finite().then_some(value)
}

/// Format a converted quantity for display ("473.2", "2")
pub fn format_quantity(value: f64) -> String {
    // Avoid rendering "-0" for tiny negative values rounded to zero
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Find the leading measurement of an ingredient line
///
/// When two words follow the quantity, they are tried together first
/// ("fluid ounces"); if that is not a known unit, the first word alone is the
/// unit and the second word is left as ingredient text ("cups flour").
pub fn parse_leading_measurement(ingredient: &str) -> Option<LeadingMeasurement<'_>> {
    let caps = LEADING_MEASUREMENT.captures(ingredient)?;
    let quantity = parse_quantity(caps.get(1)?.as_str())?;
    let first_word = caps.get(2)?;

    if let Some(second_word) = caps.get(3) {
        let two_words = &ingredient[first_word.start()..second_word.end()];
        if is_known_unit(two_words) {
            return Some(LeadingMeasurement {
                quantity,
                unit: two_words,
                matched: &ingredient[..second_word.end()],
            });
        }
    }

    Some(LeadingMeasurement {
        quantity,
        unit: first_word.as_str(),
        matched: &ingredient[..first_word.end()],
    })
}

/// Convert the leading measurement of an ingredient line
///
/// Returns the line unchanged when it has no leading quantity+unit, when the
/// unit is unknown, or when it is already in `to_system`.
///
/// Examples:
/// - "2 cups flour" -> "473.2 ml flour" (metric)
/// - "500 grams beef" -> "1.1 pounds beef" (standard)
/// - "salt to taste" -> "salt to taste"
pub fn convert_ingredient_measurement(ingredient: &str, to_system: UnitSystem) -> String {
    let Some(measurement) = parse_leading_measurement(ingredient) else {
        return ingredient.to_string();
    };

    let Some(result) = convert_measurement(measurement.quantity, measurement.unit, to_system) else {
        return ingredient.to_string();
    };

    let rest = &ingredient[measurement.matched.len()..];
    format!("{} {}{}", format_quantity(result.value), result.unit, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), Some(2.0));
        assert_eq!(parse_quantity("1.5"), Some(1.5));
        assert_eq!(parse_quantity("1/2"), Some(0.5));
        assert_eq!(parse_quantity("3/4"), Some(0.75));
        assert_eq!(parse_quantity("1/0"), None);
        assert_eq!(parse_quantity("abc"), None);
    }

    #[test]
    fn test_parse_leading_measurement() {
        let m = parse_leading_measurement("2 cups flour").unwrap();
        assert_eq!(m.quantity, 2.0);
        assert_eq!(m.unit, "cups");
        assert_eq!(m.matched, "2 cups");

        let m = parse_leading_measurement("4 fluid ounces milk").unwrap();
        assert_eq!(m.unit, "fluid ounces");
        assert_eq!(m.matched, "4 fluid ounces");

        assert!(parse_leading_measurement("salt to taste").is_none());
        assert!(parse_leading_measurement("2cups flour").is_none());
    }

    #[test]
    fn test_convert_cups_of_flour() {
        assert_eq!(
            convert_ingredient_measurement("2 cups flour", UnitSystem::Metric),
            "473.2 ml flour"
        );
    }

    #[test]
    fn test_no_leading_quantity_is_unchanged() {
        assert_eq!(
            convert_ingredient_measurement("salt to taste", UnitSystem::Metric),
            "salt to taste"
        );
        assert_eq!(convert_ingredient_measurement("", UnitSystem::Metric), "");
    }

    #[test]
    fn test_already_target_system_is_unchanged() {
        assert_eq!(
            convert_ingredient_measurement("1/2 cup sugar", UnitSystem::Standard),
            "1/2 cup sugar"
        );
        assert_eq!(
            convert_ingredient_measurement("200 g butter", UnitSystem::Metric),
            "200 g butter"
        );
    }

    #[test]
    fn test_unknown_unit_is_unchanged() {
        assert_eq!(
            convert_ingredient_measurement("3 large eggs", UnitSystem::Metric),
            "3 large eggs"
        );
        assert_eq!(
            convert_ingredient_measurement("2 cloves garlic", UnitSystem::Standard),
            "2 cloves garlic"
        );
    }

    #[test]
    fn test_fraction_quantity() {
        // 0.5 cup = 118.294 ml
        assert_eq!(
            convert_ingredient_measurement("1/2 cup sugar", UnitSystem::Metric),
            "118.3 ml sugar"
        );
        assert_eq!(
            convert_ingredient_measurement("1/0 cup sugar", UnitSystem::Metric),
            "1/0 cup sugar"
        );
    }

    #[test]
    fn test_mixed_numbers_are_not_parsed() {
        assert_eq!(
            convert_ingredient_measurement("1 1/2 cups milk", UnitSystem::Metric),
            "1 1/2 cups milk"
        );
    }

    #[test]
    fn test_two_word_units() {
        assert_eq!(
            convert_ingredient_measurement("4 fluid ounces milk", UnitSystem::Metric),
            "118.3 ml milk"
        );
        assert_eq!(
            convert_ingredient_measurement("2 fl oz rum", UnitSystem::Metric),
            "59.1 ml rum"
        );
    }

    #[test]
    fn test_rest_of_line_is_preserved() {
        assert_eq!(
            convert_ingredient_measurement("8 oz cream cheese, softened", UnitSystem::Metric),
            "226.8 g cream cheese, softened"
        );
        assert_eq!(
            convert_ingredient_measurement("1 cup of milk (warm)", UnitSystem::Metric),
            "236.6 ml of milk (warm)"
        );
        assert_eq!(convert_ingredient_measurement("2 CUPS", UnitSystem::Metric), "473.2 ml");
    }

    #[test]
    fn test_to_standard() {
        assert_eq!(
            convert_ingredient_measurement("500 grams beef", UnitSystem::Standard),
            "1.1 pounds beef"
        );
        assert_eq!(
            convert_ingredient_measurement("250 ml water", UnitSystem::Standard),
            "1.1 cups water"
        );
        assert_eq!(
            convert_ingredient_measurement("5 ml vanilla extract", UnitSystem::Standard),
            "1 teaspoons vanilla extract"
        );
    }

    #[test]
    fn test_huge_quantity_is_unchanged() {
        // Parses to ~1e307, which overflows once multiplied into milliliters
        let line = format!("{} cups water", "9".repeat(307));
        assert_eq!(convert_ingredient_measurement(&line, UnitSystem::Metric), line);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(473.2), "473.2");
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(-0.0), "0");
    }
}
