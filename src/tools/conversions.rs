//! Conversion MCP Tools
//!
//! Response shapes for the conversion tools and the thin functions that build
//! them from the conversion engine.

use serde::Serialize;

use crate::conversion::{
    convert_ingredient_list, convert_ingredient_measurement, convert_instruction_temperatures,
    convert_measurement, convert_temperature, unit_system, ConversionResult, TemperatureUnit,
    UnitFamily, UnitSystem, UNIT_DEFINITIONS,
};

/// Response for convert_temperature
#[derive(Debug, Serialize)]
pub struct TemperatureResponse {
    pub value: f64,
    pub from: TemperatureUnit,
    pub to: TemperatureUnit,
    pub converted_value: f64,
}

/// Response for convert_measurement
#[derive(Debug, Serialize)]
pub struct MeasurementResponse {
    pub converted: bool,
    pub to_system: UnitSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ConversionResult>,
    /// Why nothing was converted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

/// One converted ingredient line
#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    pub original: String,
    pub converted: String,
    pub changed: bool,
}

/// Response for convert_ingredient_list
#[derive(Debug, Serialize)]
pub struct IngredientListResponse {
    pub to_system: UnitSystem,
    pub ingredients: Vec<IngredientResponse>,
    pub changed_count: usize,
}

/// Response for convert_instruction_temperatures
#[derive(Debug, Serialize)]
pub struct InstructionResponse {
    pub to: TemperatureUnit,
    pub original: String,
    pub converted: String,
    pub changed: bool,
}

/// A recognized unit and its spellings
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub spellings: Vec<&'static str>,
    pub system: UnitSystem,
    pub family: UnitFamily,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<UnitSummary>,
    pub count: usize,
}

/// Convert a single temperature
pub fn temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> TemperatureResponse {
    TemperatureResponse {
        value,
        from,
        to,
        converted_value: convert_temperature(value, from, to),
    }
}

/// Convert a value+unit pair, explaining why when nothing happens
pub fn measurement(value: f64, unit: &str, to_system: UnitSystem) -> MeasurementResponse {
    let result = convert_measurement(value, unit, to_system);

    let reason = match (&result, unit_system(unit)) {
        (Some(_), _) => None,
        (None, None) => Some("unrecognized unit"),
        (None, Some(system)) if system == to_system => Some("unit is already in the target system"),
        (None, Some(_)) => Some("no conversion factor for unit"),
    };

    MeasurementResponse {
        converted: result.is_some(),
        to_system,
        result,
        reason,
    }
}

/// Convert one ingredient line
pub fn ingredient(line: &str, to_system: UnitSystem) -> IngredientResponse {
    let converted = convert_ingredient_measurement(line, to_system);
    IngredientResponse {
        changed: converted != line,
        original: line.to_string(),
        converted,
    }
}

/// Convert an ingredient list
pub fn ingredient_list(lines: &[String], to_system: UnitSystem) -> IngredientListResponse {
    let ingredients: Vec<IngredientResponse> = lines
        .iter()
        .zip(convert_ingredient_list(lines, to_system))
        .map(|(original, converted)| IngredientResponse {
            changed: &converted != original,
            original: original.clone(),
            converted,
        })
        .collect();

    let changed_count = ingredients.iter().filter(|i| i.changed).count();

    IngredientListResponse {
        to_system,
        ingredients,
        changed_count,
    }
}

/// Convert temperatures inside instruction text
pub fn instruction_temperatures(text: &str, to: TemperatureUnit) -> InstructionResponse {
    let converted = convert_instruction_temperatures(text, to);
    InstructionResponse {
        to,
        changed: converted != text,
        original: text.to_string(),
        converted,
    }
}

/// List every recognized unit, optionally filtered by system and family
pub fn list_units(system: Option<UnitSystem>, family: Option<UnitFamily>) -> ListUnitsResponse {
    let units: Vec<UnitSummary> = UNIT_DEFINITIONS
        .iter()
        .filter(|def| system.map_or(true, |s| def.system == s))
        .filter(|def| family.map_or(true, |f| def.family == f))
        .map(|def| UnitSummary {
            spellings: def.spellings.to_vec(),
            system: def.system,
            family: def.family,
        })
        .collect();

    ListUnitsResponse {
        count: units.len(),
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_reasons() {
        let converted = measurement(1.0, "cup", UnitSystem::Metric);
        assert!(converted.converted);
        assert_eq!(converted.reason, None);
        assert_eq!(converted.result.unwrap().unit, "ml");

        let same = measurement(1.0, "cup", UnitSystem::Standard);
        assert!(!same.converted);
        assert_eq!(same.reason, Some("unit is already in the target system"));

        let unknown = measurement(3.0, "smidgen", UnitSystem::Metric);
        assert!(!unknown.converted);
        assert_eq!(unknown.reason, Some("unrecognized unit"));
    }

    #[test]
    fn test_ingredient_list_counts_changes() {
        let lines = vec![
            "2 cups flour".to_string(),
            "salt to taste".to_string(),
            "1 lb ground beef".to_string(),
        ];
        let response = ingredient_list(&lines, UnitSystem::Metric);
        assert_eq!(response.changed_count, 2);
        assert_eq!(response.ingredients[0].converted, "473.2 ml flour");
        assert!(!response.ingredients[1].changed);
        assert_eq!(response.ingredients[2].converted, "453.6 g ground beef");
    }

    #[test]
    fn test_ingredient_unchanged() {
        let response = ingredient("3 large eggs", UnitSystem::Metric);
        assert!(!response.changed);
        assert_eq!(response.converted, "3 large eggs");
    }

    #[test]
    fn test_temperature_response() {
        let response = temperature(350.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
        assert_eq!(response.converted_value, 177.0);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["from"], "F");
        assert_eq!(json["to"], "C");
    }

    #[test]
    fn test_instruction_response() {
        let response =
            instruction_temperatures("Bake at 350°F", TemperatureUnit::Celsius);
        assert!(response.changed);
        assert_eq!(response.converted, "Bake at 177°C");
    }

    #[test]
    fn test_list_units_filter() {
        let all = list_units(None, None);
        assert_eq!(all.count, UNIT_DEFINITIONS.len());

        let metric = list_units(Some(UnitSystem::Metric), None);
        assert_eq!(metric.count, 4);
        assert!(metric.units.iter().all(|u| u.system == UnitSystem::Metric));

        let standard_weight = list_units(Some(UnitSystem::Standard), Some(UnitFamily::Weight));
        assert_eq!(standard_weight.count, 2);
        assert!(standard_weight.units.iter().all(|u| u.family == UnitFamily::Weight));

        let volume = list_units(None, Some(UnitFamily::Volume));
        assert_eq!(volume.count, 9);
    }

    #[test]
    fn test_measurement_json_shape() {
        let json = serde_json::to_value(measurement(1.0, "cup", UnitSystem::Metric)).unwrap();
        assert_eq!(json["to_system"], "metric");
        assert_eq!(json["result"]["value"], 236.6);
        assert_eq!(json["result"]["original_unit"], "cup");
        assert!(json.get("reason").is_none());
    }
}
