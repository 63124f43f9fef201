//! Ladle Status Tool
//!
//! Provides runtime status information about the Ladle service.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::conversion::UNIT_DEFINITIONS;

/// Conversion instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# Ladle Conversion Instructions

Ladle converts recipe quantities between US standard units and metric units.

## Tools

| Tool | Use it for |
|------|------------|
| `convert_ingredient` | One ingredient line, e.g. "2 cups flour" |
| `convert_ingredient_list` | A whole ingredient list at once |
| `convert_measurement` | A bare value + unit pair |
| `convert_temperature` | A single oven/stovetop temperature |
| `convert_instruction_temperatures` | Temperatures inside a recipe step |
| `list_units` | Every unit spelling Ladle understands |

## Behavior

- Conversions never fail. Anything Ladle cannot convert comes back unchanged:
  lines without a leading quantity ("salt to taste"), unknown units
  ("3 large eggs"), and units already in the target system.
- Ingredient lines must START with the quantity: "2 cups flour", "1/2 cup sugar",
  "1.5 lb beef". Mixed numbers such as "1 1/2 cups" are not converted.
- Only volume<->volume and weight<->weight conversions happen. Ladle never turns
  cups into grams.
- Results are rounded to one decimal place. Temperatures round to whole degrees.

## Display units

| Converting to | Volume | Weight |
|---------------|--------|--------|
| metric | ml, or liters from 1000 ml | g, or kg from 1000 g |
| standard | cups from 1 cup, else tablespoons from 1 tbsp, else teaspoons | pounds from 16 oz, else ounces |

## Defaults

If `to_system` is omitted, the server default is used (LADLE_DEFAULT_SYSTEM,
"metric" unless configured). If the target temperature unit is omitted, the
server default is used (LADLE_DEFAULT_TEMPERATURE, "C" unless configured).
"#;

/// Runtime status of the Ladle service
#[derive(Debug, Clone, Serialize)]
pub struct LadleStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Engine information
    pub known_unit_spellings: usize,
    pub config: Config,
    pub tool_calls: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: Config,
    tool_calls: AtomicU64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            config,
            tool_calls: AtomicU64::new(0),
        }
    }

    /// Count one handled tool call
    pub fn record_call(&self) {
        self.tool_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current status
    pub fn get_status(&self) -> LadleStatus {
        let build_info = BuildInfo::current();

        let known_unit_spellings = UNIT_DEFINITIONS
            .iter()
            .map(|def| def.spellings.len())
            .sum();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        LadleStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            known_unit_spellings,
            config: self.config,
            tool_calls: self.tool_calls.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_calls() {
        let tracker = StatusTracker::new(Config::default());
        tracker.record_call();
        tracker.record_call();

        let status = tracker.get_status();
        assert_eq!(status.tool_calls, 2);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.config, Config::default());
    }

    #[test]
    fn test_status_counts_unit_spellings() {
        let status = StatusTracker::new(Config::default()).get_status();
        // 25 standard spellings + 12 metric spellings
        assert_eq!(status.known_unit_spellings, 37);
    }
}
