//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.settings.server.static_dir);

    Router::new()
        // Main routes
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search))
        // API routes
        .route("/health", get(handlers::health))
        // Stylesheets and images
        .fallback_service(static_files)
        // Add middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
