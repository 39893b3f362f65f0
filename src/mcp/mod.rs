//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, constants, tool results)
//! - The tool/resource registry and its descriptors
//! - Input schema validation
//! - Per-request transport sessions
//! - The error taxonomy
//! - RPC helpers (success/error envelopes, widget metadata)
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod registry;
pub mod schema;
pub mod session;

// Re-export commonly used types and functions
pub use error::McpError;
pub use handlers::routes;
pub use registry::{Registry, RegistryError, ResourceDescriptor, ToolDescriptor};
pub use session::Session;
