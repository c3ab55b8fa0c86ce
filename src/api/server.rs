//! API Server Module
//!
//! Application state, router assembly, and server startup.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::routes::address;
use crate::config::ExplorerConfig;
use crate::error::ExplorerError;
use crate::gateway::{Gateway, HttpGateway};
use crate::logging::generate_correlation_id;

/// Combined application state for all API endpoints
///
/// Holds the gateway handle only; handlers share no mutable state, so
/// concurrent requests are fully independent.
pub struct AppState {
    /// Chain gateway client
    pub gateway: Arc<dyn Gateway>,
}

/// Shared application state type
pub type SharedAppState = Arc<AppState>;

impl AppState {
    /// Create new application state around the given gateway
    pub fn new(gateway: Arc<dyn Gateway>) -> SharedAppState {
        Arc::new(Self { gateway })
    }
}

/// Create the API router
pub fn create_router(state: SharedAppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    address::address_router()
        .route("/api/health", get(handle_health))
        .layer(middleware::from_fn(trace_request))
        .layer(cors)
        .with_state(state)
}

/// GET /api/health
///
/// Health check endpoint.
async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "explorer-backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Log every request with a correlation id, status, and duration
async fn trace_request(req: Request, next: Next) -> Response {
    let correlation_id = generate_correlation_id();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        target: "explorer::api",
        %correlation_id,
        %method,
        path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    response
}

/// Start the explorer API server
pub async fn start_server(config: &ExplorerConfig) -> Result<(), ExplorerError> {
    let gateway = HttpGateway::new(&config.gateway_url, config.gateway_timeout)?;
    let state = AppState::new(Arc::new(gateway));
    let app = create_router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.api_port));

    println!("=== Explorer Backend API ===");
    println!("Listening on http://{}", addr);
    println!("Gateway: {}", config.gateway_url);
    println!();
    println!("Endpoints:");
    for route in address::ROUTES {
        println!("  {:<4} {}", route.method, route.path);
    }
    println!("  GET  /api/health");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
