//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the MCP request dispatcher. Each inbound POST is
//! bound to a fresh per-request session, parsed, resolved against the
//! registry, validated, executed, and serialized back, strictly in that
//! order. Every failure along the way becomes a structured JSON-RPC error;
//! nothing here may crash the process.
//!
//! `handle_tool_call` is exported publicly to make it accessible for tests.

use super::error::McpError;
use super::helpers::*;
use super::models::*;
use super::registry::Registry;
use super::schema;
use super::session::Session;
use crate::jokes::corpus::JokeCorpus;
use crate::jokes::state::{AppState, SharedState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
///
/// Binds the request to a fresh session and runs the dispatch. The session
/// is dropped on every exit path, including client disconnect (axum drops
/// the future), which runs its teardown hook exactly once.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Received -> Parsed. Malformed envelopes never reach the registry.
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!("json parse error: {}", e.body_text());
            let err = McpError::Parse;
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, err.code(), err.to_string())),
            )
                .into_response();
        }
    };

    let mut session = Session::new();
    let session_id = session.id();
    session.on_teardown(move || {
        tracing::debug!(session = %session_id, "transport torn down");
    });

    let id = req.id.unwrap_or(Value::Null);
    let method = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    info!(session = %session.id(), method, "mcp call");

    let response_body = match dispatch(&state, method, params) {
        Ok(result) => rpc_success(id, result),
        Err(err) => {
            warn!(session = %session.id(), method, %err, "mcp call failed");
            rpc_error(id, err.code(), err.to_string())
        }
    };

    Json(response_body).into_response()
}

/// Parsed -> Resolved -> Validated -> Executing, per method.
fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value, McpError> {
    match method {
        "initialize" => Ok(handle_initialize()),
        "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(handle_tools_list(&state.registry)),
        "resources/list" => Ok(handle_resources_list(&state.registry)),
        "resources/read" => handle_resources_read(&state.registry, &params),
        "tools/call" => {
            let name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);
            handle_tool_call(state, name, args)
        }
        other => Err(McpError::MethodNotFound(other.to_string())),
    }
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true, "subscribe": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

/// Handles `tools/list` request from the registry catalog.
fn handle_tools_list(registry: &Registry) -> Value {
    json!({
        "tools": registry.tools().iter().map(tool_listing).collect::<Vec<_>>(),
    })
}

/// Handles `resources/list` request from the registry catalog.
fn handle_resources_list(registry: &Registry) -> Value {
    json!({
        "resources": registry
            .resources()
            .iter()
            .map(resource_listing)
            .collect::<Vec<_>>(),
    })
}

/// Handles `resources/read` request: looks the URI up in the registry.
fn handle_resources_read(registry: &Registry, params: &Value) -> Result<Value, McpError> {
    let uri = params
        .get("uri")
        .and_then(|u| u.as_str())
        .ok_or_else(|| McpError::InvalidArguments("missing required field 'uri'".into()))?;

    let resource = registry
        .resolve_resource(uri)
        .ok_or_else(|| McpError::UnknownResource(uri.to_string()))?;

    Ok(json!({
        "contents": [resource_contents(resource)],
    }))
}

/// Handles `tools/call` request: resolve, validate, then execute.
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, McpError> {
    let tool = state
        .registry
        .resolve_tool(name)
        .ok_or_else(|| McpError::UnknownTool(name.to_string()))?;

    schema::validate(&tool.input_schema, &args)?;

    let result = match name {
        JOKE_TOOL_NAME => tell_joke(&state.corpus, args)?,
        RANDOM_JOKE_TOOL_NAME => tell_random_joke(&state.corpus),
        // Registered tool without an execution arm: a catalog bug, surfaced
        // as a handler error rather than a crash.
        other => return Err(McpError::Handler(format!("no handler for tool {other}"))),
    };

    Ok(result.into_value(tool))
}

/// Returns the joke at the requested index.
fn tell_joke(corpus: &JokeCorpus, args: Value) -> Result<ToolResult, McpError> {
    let input: TellJokeInput =
        serde_json::from_value(args).map_err(|e| McpError::InvalidArguments(e.to_string()))?;

    let joke = corpus.get(input.id)?;
    Ok(ToolResult::structured(json!({ "joke": joke })))
}

/// Returns a random joke from the corpus.
fn tell_random_joke(corpus: &JokeCorpus) -> ToolResult {
    ToolResult::structured(json!({ "joke": corpus.random() }))
}
