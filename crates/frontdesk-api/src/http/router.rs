//! Axum router configuration with middleware.
//!
//! Three surfaces: POST /chat, GET /health, and a static asset fallback.
//! Middleware: CORS, request tracing.
//!
//! Static assets are served from `public/` (configurable via
//! `FRONTDESK_PUBLIC_DIR`); the chat and health routes take priority, and
//! any other path resolves against that directory or answers 404.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete gateway router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_dir =
        std::env::var("FRONTDESK_PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(handlers::health::health))
        .fallback_service(ServeDir::new(&public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
