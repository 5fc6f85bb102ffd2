//! # Routes
//!
//! Axum router configuration for the session proxy.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /api/create-wert-session - Create a Wert session
/// - GET  /health - Health check
/// - everything else - static files from `config.static_dir`
pub fn create_router(state: AppState) -> Router {
    // The frontend may be hosted elsewhere, so allow any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files =
        ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/create-wert-session", post(handlers::create_wert_session))
        .fallback_service(static_files)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        // State
        .with_state(state)
}
