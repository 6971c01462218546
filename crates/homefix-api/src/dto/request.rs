use homefix_core::models::Contact;
use serde::Deserialize;

/// Classification request body
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub preselected_discipline: Option<String>,
}

/// Raw coordinates, validated into a `GeoPoint` by the service layer
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointBody {
    pub lat: f64,
    pub lng: f64,
}

/// Match request body
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub origin: PointBody,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub max_results: Option<usize>,
    #[serde(default)]
    pub discipline: Option<String>,
}

/// Either coordinates or a free-text address
#[derive(Debug, Default, Deserialize)]
pub struct LocationBody {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A classification the client already confirmed
#[derive(Debug, Deserialize)]
pub struct ClassificationBody {
    pub discipline: String,
    pub urgency: i64,
    pub diagnosis: String,
}

/// Lead submission body.
///
/// Without `classification`, the description is classified on the server
/// (honouring `discipline` as a preselection).
#[derive(Debug, Deserialize)]
pub struct LeadBody {
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub location: LocationBody,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub priority_tier: bool,
    #[serde(default)]
    pub discipline: Option<String>,
    #[serde(default)]
    pub classification: Option<ClassificationBody>,
}
