use homefix_core::models::{Classification, Discipline};

use crate::dto::ClassifyRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Parse an optional discipline label; blank counts as absent
pub fn parse_discipline(value: Option<&str>, field: &str) -> Result<Option<Discipline>, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(label) => label
            .parse::<Discipline>()
            .map(Some)
            .map_err(|e| ApiError::from(e).at_field(field)),
        None => Ok(None),
    }
}

/// Service for classifying request text
pub struct ClassifyService;

impl ClassifyService {
    pub async fn execute(
        state: &AppState,
        request: &ClassifyRequest,
    ) -> Result<Classification, ApiError> {
        let preselected =
            parse_discipline(request.preselected_discipline.as_deref(), "preselected_discipline")?;

        Ok(state
            .classifier
            .classify(&request.text, request.image_ref.as_deref(), preselected)
            .await)
    }
}
