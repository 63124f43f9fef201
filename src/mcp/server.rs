//! Ladle MCP Server Implementation
//!
//! Implements the MCP server with all Ladle conversion tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::conversion::{TemperatureUnit, UnitFamily, UnitSystem};
use crate::tools::conversions;
use crate::tools::status::{StatusTracker, CONVERSION_INSTRUCTIONS};

/// Ladle MCP Service
#[derive(Clone)]
pub struct LadleService {
    status_tracker: Arc<StatusTracker>,
    config: Config,
    tool_router: ToolRouter<LadleService>,
}

impl LadleService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(config)),
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Resolve an optional measurement system parameter against the configured default
    fn resolve_system(&self, to_system: Option<&str>) -> Result<UnitSystem, McpError> {
        match to_system {
            Some(s) => parse_system(s),
            None => Ok(self.config.default_system),
        }
    }

    /// Resolve an optional temperature unit parameter against the configured default
    fn resolve_temperature(&self, unit: Option<&str>) -> Result<TemperatureUnit, McpError> {
        match unit {
            Some(s) => parse_temperature(s),
            None => Ok(self.config.default_temperature),
        }
    }
}

fn parse_system(s: &str) -> Result<UnitSystem, McpError> {
    s.parse::<UnitSystem>()
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

fn parse_family(s: &str) -> Result<UnitFamily, McpError> {
    s.parse::<UnitFamily>()
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

fn parse_temperature(s: &str) -> Result<TemperatureUnit, McpError> {
    s.parse::<TemperatureUnit>()
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Conversion Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertTemperatureParams {
    /// Temperature value
    pub value: f64,
    /// Unit of the value: "C" or "F"
    pub from: String,
    /// Target unit: "C" or "F"
    pub to: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertMeasurementParams {
    /// Quantity to convert
    pub value: f64,
    /// Unit of the quantity (e.g., "cups", "tbsp", "grams")
    pub unit: String,
    /// Target system: "metric" or "standard" (default from server config)
    pub to_system: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertIngredientParams {
    /// Ingredient line starting with a quantity, e.g. "2 cups flour"
    pub ingredient: String,
    /// Target system: "metric" or "standard" (default from server config)
    pub to_system: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertIngredientListParams {
    /// Ingredient lines, in recipe order
    pub ingredients: Vec<String>,
    /// Target system: "metric" or "standard" (default from server config)
    pub to_system: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertInstructionTemperaturesParams {
    /// Recipe instruction text, e.g. "Preheat the oven to 350°F"
    pub text: String,
    /// Target unit: "C" or "F" (default from server config)
    pub to: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Only list units of this system: "metric" or "standard" (optional)
    pub system: Option<String>,
    /// Only list units of this family: "volume" or "weight" (optional)
    pub family: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl LadleService {
    // --- Status ---

    #[tool(description = "Get the current status of the Ladle service including build info, configuration, and process information")]
    async fn ladle_status(&self) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for converting recipe measurements. Call this when unsure how the conversion tools behave.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Conversions ---

    #[tool(description = "Convert a temperature between Celsius (C) and Fahrenheit (F), rounded to whole degrees")]
    fn convert_temperature(&self, Parameters(p): Parameters<ConvertTemperatureParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        let from = parse_temperature(&p.from)?;
        let to = parse_temperature(&p.to)?;
        json_result(&conversions::temperature(p.value, from, to))
    }

    #[tool(description = "Convert a value and unit (e.g., 2 cups) to the metric or standard system. Returns converted=false with a reason when the unit is unknown or already in the target system.")]
    fn convert_measurement(&self, Parameters(p): Parameters<ConvertMeasurementParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        let to_system = self.resolve_system(p.to_system.as_deref())?;
        json_result(&conversions::measurement(p.value, &p.unit, to_system))
    }

    #[tool(description = "Convert the leading quantity and unit of an ingredient line (e.g., '2 cups flour' -> '473.2 ml flour'). Lines that cannot be converted are returned unchanged.")]
    fn convert_ingredient(&self, Parameters(p): Parameters<ConvertIngredientParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        let to_system = self.resolve_system(p.to_system.as_deref())?;
        json_result(&conversions::ingredient(&p.ingredient, to_system))
    }

    #[tool(description = "Convert every line of a recipe's ingredient list. Order is preserved; lines that cannot be converted are returned unchanged.")]
    fn convert_ingredient_list(&self, Parameters(p): Parameters<ConvertIngredientListParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        let to_system = self.resolve_system(p.to_system.as_deref())?;
        json_result(&conversions::ingredient_list(&p.ingredients, to_system))
    }

    #[tool(description = "Rewrite oven temperatures inside recipe instruction text (e.g., 'Bake at 350°F' -> 'Bake at 177°C')")]
    fn convert_instruction_temperatures(&self, Parameters(p): Parameters<ConvertInstructionTemperaturesParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        let to = self.resolve_temperature(p.to.as_deref())?;
        json_result(&conversions::instruction_temperatures(&p.text, to))
    }

    #[tool(description = "List every unit spelling the converter recognizes, with its system and family")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_call();
        let system = match p.system.as_deref() {
            Some(s) => Some(parse_system(s)?),
            None => None,
        };
        let family = match p.family.as_deref() {
            Some(s) => Some(parse_family(s)?),
            None => None,
        };
        json_result(&conversions::list_units(system, family))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for LadleService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ladle".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Ladle Recipe Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Ladle - recipe measurement conversion between US standard and metric units. \
                 Call conversion_instructions first if unsure. \
                 Ingredients: convert_ingredient, convert_ingredient_list. \
                 Quantities: convert_measurement, list_units. \
                 Temperatures: convert_temperature, convert_instruction_temperatures. \
                 Anything that cannot be converted is returned unchanged. \
                 Status: ladle_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_system_uses_default() {
        let service = LadleService::new(Config {
            default_system: UnitSystem::Standard,
            default_temperature: TemperatureUnit::Fahrenheit,
        });
        assert_eq!(service.resolve_system(None).unwrap(), UnitSystem::Standard);
        assert_eq!(service.resolve_system(Some("Metric")).unwrap(), UnitSystem::Metric);
        assert!(service.resolve_system(Some("cubits")).is_err());
    }

    #[test]
    fn test_resolve_temperature_uses_default() {
        let service = LadleService::new(Config::default());
        assert_eq!(service.resolve_temperature(None).unwrap(), TemperatureUnit::Celsius);
        assert_eq!(service.resolve_temperature(Some("f")).unwrap(), TemperatureUnit::Fahrenheit);
        assert!(service.resolve_temperature(Some("kelvin")).is_err());
    }

    #[test]
    fn test_parse_family_rejects_unknown() {
        assert_eq!(parse_family("weight").unwrap(), UnitFamily::Weight);
        assert!(parse_family("length").is_err());
    }

    #[test]
    fn test_server_info() {
        let info = LadleService::new(Config::default()).get_info();
        assert_eq!(info.server_info.name, "ladle");
        assert!(info.capabilities.tools.is_some());
    }
}
