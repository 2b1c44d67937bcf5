//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Class session CRUD
        .route("/classes", get(handlers::list_classes))
        .route("/classes", post(handlers::create_class))
        .route("/classes/{id}", get(handlers::get_class))
        .route("/classes/{id}", put(handlers::update_class))
        .route("/classes/{id}", delete(handlers::delete_class))
        // Gym slot CRUD
        .route("/gym", get(handlers::list_gym_slots))
        .route("/gym", post(handlers::create_gym_slot))
        .route("/gym/{id}", get(handlers::get_gym_slot))
        .route("/gym/{id}", put(handlers::update_gym_slot))
        .route("/gym/{id}", delete(handlers::delete_gym_slot))
        // Personal timetable
        .route("/timetable", get(handlers::get_timetable))
        .route("/timetable", put(handlers::put_timetable))
        .route("/timetable/calendar", get(handlers::export_timetable));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
