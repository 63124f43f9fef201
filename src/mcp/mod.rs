//! MCP server module
//!
//! Exposes the conversion engine as MCP tools over stdio.

pub mod server;

pub use server::LadleService;
