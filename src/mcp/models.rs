//! MCP Protocol Models and Constants
//!
//! This module contains the data structures and constants related to the
//! Model Context Protocol (MCP) specification and the server's catalog
//! identifiers.

use serde::Deserialize;
use serde_json::{json, Value};

use super::helpers::tool_meta;
use super::registry::ToolDescriptor;

// =============================================================================
// Catalog Constants
// =============================================================================

/// Name of the indexed joke tool
pub const JOKE_TOOL_NAME: &str = "tell-me-a-joke";
/// Name of the random joke tool
pub const RANDOM_JOKE_TOOL_NAME: &str = "tell-me-a-random-joke";
/// Name of the joke count resource
pub const COUNT_RESOURCE_NAME: &str = "jokes_count";
/// URI of the joke count resource
pub const COUNT_RESOURCE_URI: &str = "jokes://count";
/// Name of the widget resource
pub const WIDGET_RESOURCE_NAME: &str = "joke-widget";
/// URI for the widget template
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/joke.html";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "dadjokes";
/// Server version advertised in the handshake and manifest
pub const SERVER_VERSION: &str = "1.0.0";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// Validated input for the indexed joke tool
#[derive(Debug, Deserialize)]
pub struct TellJokeInput {
    /// Joke index within the corpus
    pub id: i64,
}

/// Outcome of one tool invocation, before protocol serialization.
///
/// `content` carries ordered display blocks (may be empty); the structured
/// payload is opaque to the transport and consumed by the widget.
pub struct ToolResult {
    pub content: Vec<Value>,
    pub structured_content: Value,
}

impl ToolResult {
    /// A result with no display blocks, only structured output for the widget.
    pub fn structured(payload: Value) -> Self {
        Self {
            content: Vec::new(),
            structured_content: payload,
        }
    }

    /// Serializes the result as a `tools/call` response body, attaching the
    /// invoked tool's widget metadata.
    pub fn into_value(self, tool: &ToolDescriptor) -> Value {
        json!({
            "content": self.content,
            "structuredContent": self.structured_content,
            "_meta": tool_meta(tool),
        })
    }
}
