use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use homefix_core::models::{Lead, LeadId};
use uuid::Uuid;

use crate::dto::{LeadBody, LeadCreatedResponse};
use crate::error::ApiError;
use crate::services::LeadSubmissionService;
use crate::state::AppState;

pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LeadBody>,
) -> Result<(StatusCode, Json<LeadCreatedResponse>), ApiError> {
    tracing::info!(
        priority_tier = body.priority_tier,
        has_classification = body.classification.is_some(),
        "Processing lead submission"
    );

    let lead = LeadSubmissionService::execute(&state, body).await?;

    Ok((
        StatusCode::CREATED,
        Json(LeadCreatedResponse {
            id: lead.id(),
            location_approximate: lead.location_approximate(),
        }),
    ))
}

pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(lead_id): Path<Uuid>,
) -> Result<Json<Lead>, ApiError> {
    state
        .leads
        .get(LeadId(lead_id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Lead {} not found", lead_id)))
}
