use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Classification
        .route("/api/v1/classify", post(handlers::classify))

        // Matching
        .route("/api/v1/match", post(handlers::find_matches))
        .route("/api/v1/match/geojson", post(handlers::find_matches_geojson))

        // Leads
        .route("/api/v1/leads", post(handlers::submit_lead))
        .route("/api/v1/leads/{lead_id}", get(handlers::get_lead))

        .with_state(state)
}
