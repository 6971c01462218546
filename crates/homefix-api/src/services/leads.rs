use homefix_core::models::{
    Classification, ClassificationSource, Lead, LeadRequest, LocationInput, Urgency,
};
use homefix_core::text::normalize;
use homefix_core::LeadValidationError;
use homefix_leads::coordinates;

use crate::dto::{ClassificationBody, LeadBody, LocationBody};
use crate::error::ApiError;
use crate::services::parse_discipline;
use crate::state::AppState;

/// Service for validating and persisting leads
pub struct LeadSubmissionService;

impl LeadSubmissionService {
    /// Edge conversions run in the same order as the assembler's rules
    /// (phone, location, classification) so the first reported field matches.
    pub async fn execute(state: &AppState, body: LeadBody) -> Result<Lead, ApiError> {
        if body.contact.phone.trim().is_empty() {
            return Err(LeadValidationError::MissingContact.into());
        }

        let location = location_input(&body.location)?;
        let classification = Self::classification(state, &body).await?;

        let mut request = LeadRequest::new(body.contact, location)
            .with_priority_tier(body.priority_tier);
        request.description = body.description;
        request.image_ref = body.image_ref;

        let lead = state.leads.submit(classification.as_ref(), request).await?;
        Ok(lead)
    }

    async fn classification(
        state: &AppState,
        body: &LeadBody,
    ) -> Result<Option<Classification>, ApiError> {
        if let Some(confirmed) = &body.classification {
            return confirmed_classification(confirmed, body.description.as_deref()).map(Some);
        }

        let text = body.description.as_deref().map(str::trim).filter(|t| !t.is_empty());
        match text {
            Some(text) => {
                let preselected = parse_discipline(body.discipline.as_deref(), "discipline")?;
                Ok(Some(
                    state.classifier.classify(text, body.image_ref.as_deref(), preselected).await,
                ))
            }
            None => Ok(None),
        }
    }
}

fn location_input(body: &LocationBody) -> Result<LocationInput, ApiError> {
    match (body.lat, body.lng, &body.address) {
        (Some(lat), Some(lng), _) => Ok(coordinates(lat, lng)?),
        (_, _, Some(address)) => Ok(LocationInput::Address(address.clone())),
        // Half a coordinate pair is a coordinate problem, not a missing location
        (Some(_), None, None) | (None, Some(_), None) => {
            Err(LeadValidationError::InvalidCoordinates {
                lat: body.lat.unwrap_or(f64::NAN),
                lng: body.lng.unwrap_or(f64::NAN),
            }
            .into())
        }
        _ => Err(LeadValidationError::UnresolvableLocation.into()),
    }
}

fn confirmed_classification(
    body: &ClassificationBody,
    description: Option<&str>,
) -> Result<Classification, ApiError> {
    let discipline = parse_discipline(Some(&body.discipline), "classification.discipline")?
        .ok_or(LeadValidationError::MissingDiscipline)?;
    let urgency =
        Urgency::new(body.urgency).map_err(|e| ApiError::from(e).at_field("classification.urgency"))?;

    Classification::new(
        discipline,
        urgency,
        body.diagnosis.clone(),
        normalize(description.unwrap_or_default()),
        ClassificationSource::Remote,
    )
    .map_err(|e| ApiError::from(e).at_field("classification.diagnosis"))
}
