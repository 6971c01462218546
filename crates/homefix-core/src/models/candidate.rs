use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Discipline, GeoPoint};

/// Directory identifier of a professional
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of a professional profile owned by the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalCandidate {
    /// Directory identifier
    pub id: CandidateId,

    /// Name shown to clients
    pub display_name: String,

    /// Trade the professional is registered under
    pub discipline: Discipline,

    /// Service location; `None` when the profile has no coordinates yet
    #[serde(default)]
    pub location: Option<GeoPoint>,

    /// Average review score, if any reviews exist
    #[serde(default)]
    pub rating_average: Option<f64>,

    #[serde(default)]
    pub verified: bool,
}

impl ProfessionalCandidate {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        discipline: Discipline,
        location: Option<GeoPoint>,
    ) -> Self {
        Self {
            id: CandidateId(id.into()),
            display_name: display_name.into(),
            discipline,
            location,
            rating_average: None,
            verified: false,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating_average = Some(rating);
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }
}

/// A candidate that survived ranking, with its distance from the origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub candidate: ProfessionalCandidate,
    pub distance_km: f64,
}
