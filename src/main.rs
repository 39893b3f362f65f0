use dad_jokes_rust::jokes::AppState;
use dad_jokes_rust::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build the fixed catalog; a malformed catalog is a startup bug.
    let state = match AppState::new() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("failed to build capability catalog: {e}");
            std::process::exit(1);
        }
    };
    info!("serving {} jokes", state.corpus.count());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address (PORT env var, default 3000)
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    info!("MCP server running on http://{addr}/mcp");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
