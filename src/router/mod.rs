//! Routing module for the dad-jokes MCP server

use crate::jokes::state::SharedState;
use crate::mcp::models::{SERVER_NAME, SERVER_VERSION};
use axum::{
    body::Body, extract::Request, middleware::Next, response::Json, routing::get, Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let res = next.run(req).await;
        if res.status().is_success() {
            debug!(%method, %uri, status = %res.status(), "request");
        } else {
            warn!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::mcp::routes())
        .route("/manifest.json", get(manifest))
        .layer(log_layer)
        // A panicking handler must not take the process down with it.
        .layer(CatchPanicLayer::new())
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: GET /manifest.json
/// Static descriptor of server identity, version, and transport location.
async fn manifest() -> Json<Value> {
    Json(json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "transport": {
            "type": "streamable-http",
            "endpoint": "/mcp"
        }
    }))
}
