use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Classification, Discipline, GeoPoint, Urgency};
use crate::error::LeadValidationError;

/// Unique identifier for a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub Uuid);

impl LeadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LeadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requester contact details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self { name: name.into(), phone: phone.into() }
    }
}

/// Where the requester wants the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationInput {
    Point(GeoPoint),
    Address(String),
}

/// Everything a lead needs besides the classification
#[derive(Debug, Clone, PartialEq)]
pub struct LeadRequest {
    pub contact: Contact,
    pub location: LocationInput,
    /// Original description; the normalized one is used when absent
    pub description: Option<String>,
    pub image_ref: Option<String>,
    /// Requester is on the priority service tier
    pub priority_tier: bool,
}

impl LeadRequest {
    pub fn new(contact: Contact, location: LocationInput) -> Self {
        Self {
            contact,
            location,
            description: None,
            image_ref: None,
            priority_tier: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn with_priority_tier(mut self, priority_tier: bool) -> Self {
        self.priority_tier = priority_tier;
        self
    }
}

/// A location after geocoding, tagged when it is a stand-in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    /// True when geocoding failed and a default point was substituted
    pub approximate: bool,
    pub address: Option<String>,
}

/// Validated service request ready for persistence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    id: LeadId,
    contact_name: String,
    contact_phone: String,
    description: String,
    location: GeoPoint,
    location_approximate: bool,
    address: Option<String>,
    discipline: Discipline,
    urgency: Urgency,
    diagnosis: String,
    priority_boost: bool,
    image_ref: Option<String>,
    created_at: DateTime<Utc>,
}

impl Lead {
    /// Build a lead from its validated parts.
    ///
    /// The phone check is repeated here so that no `Lead` with an empty
    /// phone can exist, whichever path constructed it.
    pub fn new(
        contact: Contact,
        description: String,
        location: ResolvedLocation,
        classification: &Classification,
        priority_boost: bool,
        image_ref: Option<String>,
    ) -> Result<Self, LeadValidationError> {
        let phone = contact.phone.trim();
        if phone.is_empty() {
            return Err(LeadValidationError::MissingContact);
        }

        Ok(Self {
            id: LeadId::new(),
            contact_name: contact.name.trim().to_string(),
            contact_phone: phone.to_string(),
            description,
            location: location.point,
            location_approximate: location.approximate,
            address: location.address,
            discipline: classification.discipline(),
            urgency: classification.urgency(),
            diagnosis: classification.diagnosis().to_string(),
            priority_boost,
            image_ref,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> LeadId {
        self.id
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn location_approximate(&self) -> bool {
        self.location_approximate
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn priority_boost(&self) -> bool {
        self.priority_boost
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
