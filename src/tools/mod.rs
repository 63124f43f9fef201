//! Ladle Tools module
//!
//! MCP tool implementations for the Ladle recipe converter.

pub mod conversions;
pub mod status;
