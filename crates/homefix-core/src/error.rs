//! Error types for HomeFix

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomefixError {
    // Structural input errors
    #[error("Invalid coordinates ({lat}, {lng}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("Invalid urgency {value}: expected a value between 1 and 10")]
    InvalidUrgency { value: i64 },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Unknown discipline: {value}")]
    UnknownDiscipline { value: String },

    // Business-rule validation
    #[error(transparent)]
    Validation(#[from] LeadValidationError),

    // Collaborator errors, surfaced intact
    #[error("Professional directory unavailable: {reason}")]
    Directory { reason: String },

    #[error("Lead persistence failed: {reason}")]
    Persistence { reason: String },

    #[error("Geocoding failed: {reason}")]
    Geocoding { reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Rejection reasons for lead assembly.
///
/// Each variant names exactly one rule so the caller can re-prompt for the
/// offending field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeadValidationError {
    #[error("A contact phone number is required")]
    MissingContact,

    #[error("Coordinates ({lat}, {lng}) are out of range")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("No location was provided for the request")]
    UnresolvableLocation,

    #[error("The request has not been classified into a discipline")]
    MissingDiscipline,
}

impl LeadValidationError {
    /// Name of the request field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            LeadValidationError::MissingContact => "contact.phone",
            LeadValidationError::InvalidCoordinates { .. } => "location.coordinates",
            LeadValidationError::UnresolvableLocation => "location",
            LeadValidationError::MissingDiscipline => "classification.discipline",
        }
    }
}

impl From<serde_json::Error> for HomefixError {
    fn from(err: serde_json::Error) -> Self {
        HomefixError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HomefixError>;
