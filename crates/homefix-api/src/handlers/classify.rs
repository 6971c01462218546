use std::sync::Arc;

use axum::{extract::State, Json};
use homefix_core::models::Classification;

use crate::dto::ClassifyRequest;
use crate::error::ApiError;
use crate::services::ClassifyService;
use crate::state::AppState;

pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<Classification>, ApiError> {
    tracing::info!(
        text_len = request.text.len(),
        has_image = request.image_ref.is_some(),
        preselected = ?request.preselected_discipline,
        "Processing classify request"
    );

    let classification = ClassifyService::execute(&state, &request).await?;

    Ok(Json(classification))
}
