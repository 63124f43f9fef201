//! Measurement conversion module
//!
//! Converts recipe quantities between US standard and metric units. Every
//! operation here is pure and fail-open: anything that cannot be converted
//! comes back unchanged.

pub mod converter;
pub mod ingredient;
pub mod recipe;
pub mod temperature;
pub mod units;

pub use converter::{convert_measurement, round_to_tenth, ConversionResult};
pub use ingredient::{
    convert_ingredient_measurement, format_quantity, parse_leading_measurement, parse_quantity,
    LeadingMeasurement,
};
pub use recipe::{convert_ingredient_list, convert_instruction_temperatures};
pub use temperature::{convert_temperature, convert_temperature_str, TemperatureUnit};
pub use units::{
    factor, is_known_unit, lookup_unit, normalize_unit, unit_family, unit_system, UnitDefinition,
    UnitFamily, UnitSystem, UNIT_DEFINITIONS,
};
