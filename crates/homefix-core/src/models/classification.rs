use serde::{Deserialize, Serialize};
use std::fmt;

use super::Discipline;
use crate::error::{HomefixError, Result};

/// Urgency on a 1..=10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Urgency(u8);

impl Urgency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Assigned when the text carries an urgency marker
    pub const HIGH: Urgency = Urgency(8);

    /// Assigned otherwise
    pub const DEFAULT: Urgency = Urgency(5);

    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(HomefixError::InvalidUrgency { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Urgency {
    type Error = HomefixError;

    fn try_from(value: i64) -> Result<Self> {
        Urgency::new(value)
    }
}

impl From<Urgency> for u8 {
    fn from(urgency: Urgency) -> u8 {
        urgency.0
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which path produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Remote,
    Local,
}

/// Result of classifying one request
///
/// Immutable once built; a new request cycle produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    discipline: Discipline,
    urgency: Urgency,
    diagnosis: String,
    normalized_description: String,
    source: ClassificationSource,
}

impl Classification {
    /// Build a classification, rejecting an empty diagnosis
    pub fn new(
        discipline: Discipline,
        urgency: Urgency,
        diagnosis: impl Into<String>,
        normalized_description: impl Into<String>,
        source: ClassificationSource,
    ) -> Result<Self> {
        let diagnosis = diagnosis.into().trim().to_string();
        if diagnosis.is_empty() {
            return Err(HomefixError::MissingField { field: "diagnosis".to_string() });
        }

        Ok(Self {
            discipline,
            urgency,
            diagnosis,
            normalized_description: normalized_description.into(),
            source,
        })
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

    pub fn normalized_description(&self) -> &str {
        &self.normalized_description
    }

    pub fn source(&self) -> ClassificationSource {
        self.source
    }

    /// Same classification with the discipline pinned to `discipline`
    pub fn with_discipline(self, discipline: Discipline) -> Self {
        Self { discipline, ..self }
    }
}
