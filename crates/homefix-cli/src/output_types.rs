use homefix_classify::DisciplineScore;
use homefix_core::config::ConfigSource;
use homefix_core::models::{
    Classification, ClassificationSource, Discipline, GeoPoint, Lead, LeadId, MatchResult, Urgency,
};
use serde::Serialize;
use tabled::Tabled;

/// Output for classify command
#[derive(Debug, Serialize)]
pub struct ClassifyOutput {
    pub discipline: Discipline,
    pub urgency: Urgency,
    pub diagnosis: String,
    pub source: ClassificationSource,
    pub normalized_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<ScoreRow>>,
}

impl ClassifyOutput {
    pub fn new(classification: &Classification, scores: Option<Vec<ScoreRow>>) -> Self {
        Self {
            discipline: classification.discipline(),
            urgency: classification.urgency(),
            diagnosis: classification.diagnosis().to_string(),
            source: classification.source(),
            normalized_description: classification.normalized_description().to_string(),
            scores,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct ScoreRow {
    #[tabled(rename = "Discipline")]
    pub discipline: String,
    #[tabled(rename = "Hits")]
    pub hits: usize,
    #[tabled(rename = "Keywords")]
    pub keywords: String,
}

impl From<DisciplineScore> for ScoreRow {
    fn from(score: DisciplineScore) -> Self {
        Self {
            discipline: score.discipline.as_str().to_string(),
            hits: score.hits,
            keywords: score.matched.join(", "),
        }
    }
}

/// Output for match command
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub origin: GeoPoint,
    pub radius_km: f64,
    pub results: Vec<MatchResult>,
}

#[derive(Debug, Tabled)]
pub struct MatchRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Discipline")]
    pub discipline: String,
    #[tabled(rename = "Distance")]
    pub distance: String,
    #[tabled(rename = "Rating")]
    pub rating: String,
    #[tabled(rename = "Verified")]
    pub verified: String,
}

impl MatchRow {
    pub fn new(rank: usize, result: &MatchResult) -> Self {
        let candidate = &result.candidate;
        Self {
            rank,
            id: candidate.id.0.clone(),
            name: candidate.display_name.clone(),
            discipline: candidate.discipline.as_str().to_string(),
            distance: format!("{:.2} km", result.distance_km),
            rating: candidate.rating_average.map_or_else(|| "-".to_string(), |r| format!("{:.1}", r)),
            verified: if candidate.verified { "yes" } else { "" }.to_string(),
        }
    }
}

/// Output for lead command
#[derive(Debug, Serialize)]
pub struct LeadOutput {
    pub id: LeadId,
    pub discipline: Discipline,
    pub urgency: Urgency,
    pub diagnosis: String,
    pub location: GeoPoint,
    pub location_approximate: bool,
    pub address: Option<String>,
    pub priority_boost: bool,
}

impl From<&Lead> for LeadOutput {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id(),
            discipline: lead.discipline(),
            urgency: lead.urgency(),
            diagnosis: lead.diagnosis().to_string(),
            location: lead.location(),
            location_approximate: lead.location_approximate(),
            address: lead.address().map(str::to_string),
            priority_boost: lead.priority_boost(),
        }
    }
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: ConfigSource,
}

#[derive(Debug, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
