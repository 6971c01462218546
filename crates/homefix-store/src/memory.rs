//! In-memory collaborators for development and testing.
//!
//! A poisoned lock means another request panicked mid-write; it is reported
//! as a directory or persistence failure instead of panicking again.

use async_trait::async_trait;
use homefix_core::error::{HomefixError, Result};
use homefix_core::models::{Discipline, Lead, LeadId, ProfessionalCandidate, Zone};
use homefix_core::ports::{CandidateDirectory, LeadStore};
use homefix_geo::distance_km;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Professional directory held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCandidateDirectory {
    candidates: Arc<RwLock<Vec<ProfessionalCandidate>>>,
}

impl MemoryCandidateDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_candidates(candidates: Vec<ProfessionalCandidate>) -> Self {
        Self { candidates: Arc::new(RwLock::new(candidates)) }
    }

    /// Load a JSON array of candidates
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let candidates: Vec<ProfessionalCandidate> = serde_json::from_str(&content)?;

        tracing::info!(path = %path.display(), count = candidates.len(), "Loaded candidate directory");
        Ok(Self::from_candidates(candidates))
    }

    /// Swap in a new snapshot
    pub fn replace(&self, candidates: Vec<ProfessionalCandidate>) -> Result<()> {
        let mut guard = self.candidates.write().map_err(|_| poisoned_directory())?;
        *guard = candidates;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.candidates.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned_directory() -> HomefixError {
    HomefixError::Directory { reason: "directory lock poisoned".to_string() }
}

#[async_trait]
impl CandidateDirectory for MemoryCandidateDirectory {
    async fn fetch_candidates(
        &self,
        zone: &Zone,
        discipline: Option<Discipline>,
    ) -> Result<Vec<ProfessionalCandidate>> {
        let candidates = self.candidates.read().map_err(|_| poisoned_directory())?;

        Ok(candidates
            .iter()
            .filter(|c| discipline.map_or(true, |d| c.discipline == d))
            .filter(|c| {
                c.location
                    .is_some_and(|location| distance_km(zone.center, location) <= zone.radius_km)
            })
            .cloned()
            .collect())
    }
}

/// Lead store held in memory, keyed by lead id
#[derive(Debug, Clone, Default)]
pub struct MemoryLeadStore {
    leads: Arc<RwLock<HashMap<LeadId, Lead>>>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.leads.read().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned_store() -> HomefixError {
    HomefixError::Persistence { reason: "lead store lock poisoned".to_string() }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn persist_lead(&self, lead: &Lead) -> Result<LeadId> {
        let mut leads = self.leads.write().map_err(|_| poisoned_store())?;
        leads.insert(lead.id(), lead.clone());
        Ok(lead.id())
    }

    async fn get_lead(&self, id: LeadId) -> Result<Option<Lead>> {
        let leads = self.leads.read().map_err(|_| poisoned_store())?;
        Ok(leads.get(&id).cloned())
    }
}
