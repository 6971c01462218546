use homefix_core::models::LeadId;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub remote_classifier: bool,
}

impl HealthResponse {
    pub fn new(remote_classifier: bool) -> Self {
        Self { status: "ok", service: "homefix-api", remote_classifier }
    }
}

/// Response for a persisted lead (201 Created)
#[derive(Debug, Serialize)]
pub struct LeadCreatedResponse {
    pub id: LeadId,
    pub location_approximate: bool,
}
