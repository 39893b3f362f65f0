//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC envelope construction
//! and for shaping registry descriptors into their MCP wire representation.

use serde_json::{json, Value};

use super::registry::{ResourceDescriptor, ToolDescriptor};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Constructs the `_meta` block required by the OpenAI widget system for a
/// tool, from the tool's own descriptor:
/// - `openai/outputTemplate` – URI of the paired widget resource.
/// - `openai/toolInvocation/invoking` / `invoked` – lifecycle display strings.
/// - `openai/widgetAccessible` – indicates the widget may be rendered.
pub fn tool_meta(tool: &ToolDescriptor) -> Value {
    let mut meta = json!({
        "openai/toolInvocation/invoking": tool.invoking,
        "openai/toolInvocation/invoked": tool.invoked,
        "openai/widgetAccessible": true,
    });

    if let Some(uri) = &tool.render_target {
        meta["openai/outputTemplate"] = json!(uri);
    }

    meta
}

/// Shapes a tool descriptor as a `tools/list` entry.
pub fn tool_listing(tool: &ToolDescriptor) -> Value {
    json!({
        "name": tool.name,
        "title": tool.title,
        "description": tool.description,
        "inputSchema": tool.input_schema,
        "annotations": {
            "destructiveHint": tool.hints.destructive,
            "openWorldHint": tool.hints.open_world,
            "readOnlyHint": tool.hints.read_only,
        },
        "_meta": tool_meta(tool),
    })
}

/// Shapes a resource descriptor as a `resources/list` entry.
pub fn resource_listing(resource: &ResourceDescriptor) -> Value {
    json!({
        "name": resource.name,
        "title": resource.title,
        "uri": resource.uri,
        "mimeType": resource.mime_type,
        "_meta": resource.meta,
    })
}

/// Shapes a resource descriptor as a `resources/read` contents entry.
pub fn resource_contents(resource: &ResourceDescriptor) -> Value {
    json!({
        "uri": resource.uri,
        "mimeType": resource.mime_type,
        "text": resource.text,
        "_meta": resource.meta,
    })
}
