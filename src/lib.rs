//! Ladle Library
//!
//! Recipe measurement conversion between US standard and metric units.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod error;
pub mod mcp;
pub mod tools;

pub use conversion::{
    convert_ingredient_measurement, convert_measurement, convert_temperature, ConversionResult,
    TemperatureUnit, UnitFamily, UnitSystem,
};
pub use error::{ConversionError, ParseResult};
