use std::sync::Arc;

use axum::{extract::State, Json};
use geojson::FeatureCollection;
use homefix_core::models::MatchResult;
use homefix_geo::matches_to_feature_collection;

use crate::dto::MatchRequest;
use crate::error::ApiError;
use crate::services::MatchService;
use crate::state::AppState;

pub async fn find_matches(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Vec<MatchResult>>, ApiError> {
    tracing::info!(
        radius_km = ?request.radius_km,
        max_results = ?request.max_results,
        discipline = ?request.discipline,
        "Processing match request"
    );

    let results = MatchService::execute(&state, &request).await?;

    Ok(Json(results))
}

/// Same ranking as [`find_matches`], rendered for map clients
pub async fn find_matches_geojson(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let results = MatchService::execute(&state, &request).await?;

    Ok(Json(matches_to_feature_collection(&results)))
}
