//! Integration tests for the MCP (Model Context Protocol) server
//!
//! These tests verify the complete MCP protocol implementation including:
//! - Server initialization and handshake
//! - Tool discovery and listing
//! - Resource discovery and reading (count + widget)
//! - Tool execution (indexed and random joke tools)
//! - Input validation and error handling
//! - Concurrent request isolation

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures_util::future::join_all;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use dad_jokes_rust::jokes::corpus::JokeCorpus;
use dad_jokes_rust::jokes::widget::WidgetConfig;
use dad_jokes_rust::jokes::AppState;
use dad_jokes_rust::router::create_app_router;

/// Helper function to create a test app backed by the built-in corpus
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new().expect("catalog build failed"));
    create_app_router(state)
}

/// Helper function to create a test app backed by an explicit corpus
fn create_test_app_with(jokes: &[&str]) -> axum::Router {
    let corpus = JokeCorpus::new(jokes.iter().map(|j| j.to_string()).collect());
    let state = Arc::new(
        AppState::with_corpus(corpus, WidgetConfig::default()).expect("catalog build failed"),
    );
    create_app_router(state)
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "text/event-stream");

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    assert!(body_str.contains("event: endpoint"));
    assert!(body_str.contains("data: /mcp"));
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "dadjokes");
    assert!(result["capabilities"]["tools"]["listChanged"]
        .as_bool()
        .unwrap());
    assert!(result["capabilities"]["resources"]["listChanged"]
        .as_bool()
        .unwrap());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app_with(&["a", "b", "c"]);

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 2);

    let tools = body["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);

    // Indexed joke tool: id bounded by the corpus size
    let joke_tool = &tools[0];
    assert_eq!(joke_tool["name"], "tell-me-a-joke");
    assert_eq!(joke_tool["title"], "Joke Teller");
    assert!(joke_tool["description"].as_str().unwrap().contains("0-2"));
    let id_schema = &joke_tool["inputSchema"]["properties"]["id"];
    assert_eq!(id_schema["type"], "integer");
    assert_eq!(id_schema["minimum"], 0);
    assert_eq!(id_schema["maximum"], 2);
    assert_eq!(
        joke_tool["_meta"]["openai/outputTemplate"],
        "ui://widget/joke.html"
    );
    assert_eq!(joke_tool["annotations"]["readOnlyHint"], true);
    assert_eq!(joke_tool["annotations"]["destructiveHint"], false);

    // Random joke tool: no parameters
    let random_tool = &tools[1];
    assert_eq!(random_tool["name"], "tell-me-a-random-joke");
    assert_eq!(random_tool["title"], "Random Joke Teller");
    assert_eq!(
        random_tool["_meta"]["openai/outputTemplate"],
        "ui://widget/joke.html"
    );
}

#[tokio::test]
async fn test_mcp_resources_list() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "resources/list", None, 3).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");

    let resources = body["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 2);

    let count = &resources[0];
    assert_eq!(count["name"], "jokes_count");
    assert_eq!(count["uri"], "jokes://count");

    let widget = &resources[1];
    assert_eq!(widget["name"], "joke-widget");
    assert_eq!(widget["uri"], "ui://widget/joke.html");
    assert_eq!(widget["mimeType"], "text/html+skybridge");
    assert_eq!(widget["_meta"]["openai/widgetPrefersBorder"], true);
}

#[tokio::test]
async fn test_mcp_resources_read_count() {
    // Scenario: a 3-item corpus reports its literal count
    let app = create_test_app_with(&["a", "b", "c"]);

    let params = json!({ "uri": "jokes://count" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 4).await;

    assert_eq!(status, StatusCode::OK);

    let contents = body["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["uri"], "jokes://count");
    assert_eq!(contents[0]["text"], "I know 3 jokes");
}

#[tokio::test]
async fn test_mcp_resources_read_widget() {
    let app = create_test_app();

    let params = json!({ "uri": "ui://widget/joke.html" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 5).await;

    assert_eq!(status, StatusCode::OK);

    let content = &body["result"]["contents"][0];
    assert_eq!(content["uri"], "ui://widget/joke.html");
    assert_eq!(content["mimeType"], "text/html+skybridge");

    // With no prior invocation the widget renders its fallback text
    let html = content["text"].as_str().unwrap();
    assert!(html.contains("Dad joke will appear here"));
    assert!(html.contains("Wait for it..."));
    assert!(html.contains("output && output.joke"));
}

#[tokio::test]
async fn test_mcp_resources_read_unknown_uri() {
    let app = create_test_app();

    let params = json!({ "uri": "jokes://missing" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 6).await;

    assert_eq!(status, StatusCode::OK);

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("Unknown resource"));
}

#[tokio::test]
async fn test_mcp_resources_read_missing_uri() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(json!({})), 7).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn test_mcp_tool_call_indexed_joke() {
    // Scenario: corpus ["a","b","c"], id=1 -> {joke: "b"}
    let app = create_test_app_with(&["a", "b", "c"]);

    let params = json!({
        "name": "tell-me-a-joke",
        "arguments": { "id": 1 }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 8).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 8);

    let result = &body["result"];
    assert_eq!(result["structuredContent"]["joke"], "b");
    assert_eq!(result["content"].as_array().unwrap().len(), 0);
    assert_eq!(
        result["_meta"]["openai/outputTemplate"],
        "ui://widget/joke.html"
    );
}

#[tokio::test]
async fn test_mcp_tool_call_out_of_range_id() {
    // Scenario: corpus ["a","b","c"], id=5 -> validation error, no result
    let app = create_test_app_with(&["a", "b", "c"]);

    let params = json!({
        "name": "tell-me-a-joke",
        "arguments": { "id": 5 }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 9).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("result").is_none());

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("between 0 and 2"));
}

#[tokio::test]
async fn test_mcp_tool_call_negative_id() {
    let app = create_test_app_with(&["a", "b", "c"]);

    let params = json!({
        "name": "tell-me-a-joke",
        "arguments": { "id": -1 }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 10).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn test_mcp_tool_call_non_integer_id() {
    let app = create_test_app_with(&["a", "b", "c"]);

    let params = json!({
        "name": "tell-me-a-joke",
        "arguments": { "id": "one" }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 11).await;

    assert_eq!(status, StatusCode::OK);

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().contains("integer"));
}

#[tokio::test]
async fn test_mcp_tool_call_missing_id() {
    let app = create_test_app_with(&["a", "b", "c"]);

    let params = json!({
        "name": "tell-me-a-joke",
        "arguments": {}
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 12).await;

    assert_eq!(status, StatusCode::OK);

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().contains("id"));
}

#[tokio::test]
async fn test_mcp_tool_call_random_joke() {
    let app = create_test_app_with(&["a", "b", "c"]);

    for id in 0..10 {
        let params = json!({
            "name": "tell-me-a-random-joke",
            "arguments": {}
        });

        let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), id).await;

        assert_eq!(status, StatusCode::OK);
        let joke = body["result"]["structuredContent"]["joke"].as_str().unwrap();
        assert!(["a", "b", "c"].contains(&joke));
    }
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app();

    let params = json!({
        "name": "unknown_tool",
        "arguments": {}
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 13).await;

    assert_eq!(status, StatusCode::OK);

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().contains("Unknown tool"));
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "unknown/method", None, 14).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 14);

    let error = &body["error"];
    assert_eq!(error["code"], -32601);
    assert_eq!(error["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_mcp_invalid_method_type() {
    let app = create_test_app();

    // method should be a string, let's pass a number
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": 123,
        "id": 1
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    // Rejection by Axum Json extractor or our handler
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mcp_ping() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "ping", None, 15).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 15);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_notifications_initialized() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "notifications/initialized", None, 16).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_concurrent_tool_calls_stay_paired() {
    // N simultaneous invocations must come back as N independent,
    // correctly id-paired results.
    let jokes = [
        "joke-0", "joke-1", "joke-2", "joke-3", "joke-4", "joke-5", "joke-6", "joke-7",
    ];
    let app = create_test_app_with(&jokes);

    let calls = (0..jokes.len() as i32).map(|i| {
        let app = app.clone();
        async move {
            let params = json!({
                "name": "tell-me-a-joke",
                "arguments": { "id": i }
            });
            let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), i).await;
            (i, status, body)
        }
    });

    for (i, status, body) in join_all(calls).await {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], i);
        assert_eq!(
            body["result"]["structuredContent"]["joke"],
            format!("joke-{i}")
        );
    }
}

#[tokio::test]
async fn test_manifest_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/manifest.json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["name"], "dadjokes");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["transport"]["endpoint"], "/mcp");
}
