use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use homefix_core::{HomefixError, LeadValidationError};
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
    /// Request field to re-prompt for
    pub field: Option<String>,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into(), details: None, field: None }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
            field: None,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_GATEWAY, message: message.into(), details: None, field: None }
    }

    /// 422 naming the offending field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
            details: None,
            field: Some(field.into()),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Re-target a validation error at a different request field
    pub fn at_field(mut self, field: impl Into<String>) -> Self {
        if self.field.is_some() {
            self.field = Some(field.into());
        }
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message, field: self.field, details: self.details };
        (self.status, Json(body)).into_response()
    }
}

impl From<LeadValidationError> for ApiError {
    fn from(err: LeadValidationError) -> Self {
        Self::validation(err.field(), err.to_string())
    }
}

impl From<HomefixError> for ApiError {
    fn from(err: HomefixError) -> Self {
        match err {
            HomefixError::Validation(e) => e.into(),
            HomefixError::InvalidCoordinates { .. } => {
                Self::validation("location.coordinates", err.to_string())
            }
            HomefixError::InvalidUrgency { .. } => Self::validation("urgency", err.to_string()),
            HomefixError::UnknownDiscipline { .. } => {
                Self::validation("discipline", err.to_string())
            }
            HomefixError::MissingField { ref field } => {
                Self::validation(field.clone(), err.to_string())
            }
            HomefixError::Directory { .. }
            | HomefixError::Persistence { .. }
            | HomefixError::Geocoding { .. } => {
                tracing::error!(error = %err, "Collaborator failure");
                Self::bad_gateway("Upstream service failed").with_details(err.to_string())
            }
            _ => {
                tracing::error!(error = %err, "Internal error");
                Self::internal("Internal error").with_details(err.to_string())
            }
        }
    }
}
