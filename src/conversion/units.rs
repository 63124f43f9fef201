//! Unit types and conversion constants
//!
//! Provides the measurement system and family types plus the static table of
//! accepted unit spellings and their conversion factors.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ParseResult};

/// Measurement system a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// US customary (cups, tablespoons, ounces, pounds, ...)
    Standard,
    /// Milliliters, liters, grams, kilograms
    Metric,
}

impl UnitSystem {
    /// Convert to the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Standard => "standard",
            UnitSystem::Metric => "metric",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = ConversionError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "us" | "imperial" => Ok(UnitSystem::Standard),
            "metric" => Ok(UnitSystem::Metric),
            _ => Err(ConversionError::UnknownSystem(s.to_string())),
        }
    }
}

/// Physical family of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Volume,
    Weight,
}

impl UnitFamily {
    /// Table key of the metric base unit every standard unit of this family maps to
    pub fn metric_base(&self) -> &'static str {
        match self {
            UnitFamily::Volume => "ml",
            UnitFamily::Weight => "gram",
        }
    }

    /// Convert to the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitFamily::Volume => "volume",
            UnitFamily::Weight => "weight",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitFamily {
    type Err = ConversionError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Ok(UnitFamily::Volume),
            "weight" | "mass" => Ok(UnitFamily::Weight),
            _ => Err(ConversionError::UnknownFamily(s.to_string())),
        }
    }
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Conversion Factor Table
// ============================================================================

/// A group of spellings that share one row of conversion factors
#[derive(Debug)]
pub struct UnitDefinition {
    /// Every accepted lowercase spelling of the unit
    pub spellings: &'static [&'static str],
    pub system: UnitSystem,
    pub family: UnitFamily,
    /// Target unit key -> quantity of the target in one of this unit
    pub factors: &'static [(&'static str, f64)],
}

impl UnitDefinition {
    /// Factor converting one of this unit into `target`
    pub fn factor(&self, target: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(name, _)| *name == target)
            .map(|(_, factor)| *factor)
    }
}

const METRIC_VOLUME_FACTORS_PER_ML: [(&str, f64); 3] = [
    ("cup", 1.0 / ML_PER_CUP),
    ("tablespoon", 1.0 / ML_PER_TBSP),
    ("teaspoon", 1.0 / ML_PER_TSP),
];

const METRIC_VOLUME_FACTORS_PER_LITER: [(&str, f64); 3] = [
    ("cup", ML_PER_LITER / ML_PER_CUP),
    ("tablespoon", ML_PER_LITER / ML_PER_TBSP),
    ("teaspoon", ML_PER_LITER / ML_PER_TSP),
];

/// Every unit the engine recognizes
pub static UNIT_DEFINITIONS: &[UnitDefinition] = &[
    // Standard volume
    UnitDefinition {
        spellings: &["cup", "cups"],
        system: UnitSystem::Standard,
        family: UnitFamily::Volume,
        factors: &[("ml", ML_PER_CUP)],
    },
    UnitDefinition {
        spellings: &["tablespoon", "tablespoons", "tbsp"],
        system: UnitSystem::Standard,
        family: UnitFamily::Volume,
        factors: &[("ml", ML_PER_TBSP)],
    },
    UnitDefinition {
        spellings: &["teaspoon", "teaspoons", "tsp"],
        system: UnitSystem::Standard,
        family: UnitFamily::Volume,
        factors: &[("ml", ML_PER_TSP)],
    },
    UnitDefinition {
        spellings: &["fluid ounce", "fluid ounces", "fl_oz", "fl oz"],
        system: UnitSystem::Standard,
        family: UnitFamily::Volume,
        factors: &[("ml", ML_PER_FL_OZ)],
    },
    UnitDefinition {
        spellings: &["pint", "pints"],
        system: UnitSystem::Standard,
        family: UnitFamily::Volume,
        factors: &[("ml", ML_PER_PINT)],
    },
    UnitDefinition {
        spellings: &["quart", "quarts"],
        system: UnitSystem::Standard,
        family: UnitFamily::Volume,
        factors: &[("ml", ML_PER_QUART)],
    },
    UnitDefinition {
        spellings: &["gallon", "gallons"],
        system: UnitSystem::Standard,
        family: UnitFamily::Volume,
        factors: &[("ml", ML_PER_GALLON)],
    },
    // Standard weight
    UnitDefinition {
        spellings: &["pound", "pounds", "lb", "lbs"],
        system: UnitSystem::Standard,
        family: UnitFamily::Weight,
        factors: &[("gram", G_PER_LB)],
    },
    UnitDefinition {
        spellings: &["ounce", "ounces", "oz"],
        system: UnitSystem::Standard,
        family: UnitFamily::Weight,
        factors: &[("gram", G_PER_OZ)],
    },
    // Metric volume
    UnitDefinition {
        spellings: &["milliliter", "milliliters", "ml"],
        system: UnitSystem::Metric,
        family: UnitFamily::Volume,
        factors: &METRIC_VOLUME_FACTORS_PER_ML,
    },
    UnitDefinition {
        spellings: &["liter", "liters", "l"],
        system: UnitSystem::Metric,
        family: UnitFamily::Volume,
        factors: &METRIC_VOLUME_FACTORS_PER_LITER,
    },
    // Metric weight
    UnitDefinition {
        spellings: &["gram", "grams", "g"],
        system: UnitSystem::Metric,
        family: UnitFamily::Weight,
        factors: &[("ounce", 1.0 / G_PER_OZ)],
    },
    UnitDefinition {
        spellings: &["kilogram", "kilograms", "kg"],
        system: UnitSystem::Metric,
        family: UnitFamily::Weight,
        factors: &[("ounce", G_PER_KG / G_PER_OZ)],
    },
];

static UNIT_TABLE: LazyLock<HashMap<&'static str, &'static UnitDefinition>> =
    LazyLock::new(|| {
        UNIT_DEFINITIONS
            .iter()
            .flat_map(|def| def.spellings.iter().map(move |spelling| (*spelling, def)))
            .collect()
    });

// ============================================================================
// Unit Recognition
// ============================================================================

/// Normalize a unit token for table lookup
///
/// Lowercases, trims, and collapses inner whitespace ("Fluid   Ounces" -> "fluid ounces").
pub fn normalize_unit(unit: &str) -> String {
    unit.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up the table row for a unit spelling (case-insensitive)
pub fn lookup_unit(unit: &str) -> Option<&'static UnitDefinition> {
    UNIT_TABLE.get(normalize_unit(unit).as_str()).copied()
}

/// Determine which measurement system a unit belongs to
pub fn unit_system(unit: &str) -> Option<UnitSystem> {
    lookup_unit(unit).map(|def| def.system)
}

/// Determine whether a unit measures volume or weight
pub fn unit_family(unit: &str) -> Option<UnitFamily> {
    lookup_unit(unit).map(|def| def.family)
}

/// Get the factor converting one `unit` into `target`
pub fn factor(unit: &str, target: &str) -> Option<f64> {
    lookup_unit(unit).and_then(|def| def.factor(target))
}

/// Whether the unit spelling is in the table
pub fn is_known_unit(unit: &str) -> bool {
    lookup_unit(unit).is_some()
}
