use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{Discipline, GeoPoint, Lead, LeadId, ProfessionalCandidate, Zone};

/// Read access to the professional directory
#[async_trait]
pub trait CandidateDirectory: Send + Sync {
    /// Snapshot of candidates serving `zone`, optionally limited to one discipline.
    /// Implementations should leave out candidates without coordinates.
    async fn fetch_candidates(
        &self,
        zone: &Zone,
        discipline: Option<Discipline>,
    ) -> Result<Vec<ProfessionalCandidate>>;
}

/// Best-effort address resolution
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve free-text address to a point; `Ok(None)` when nothing matched
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>>;

    /// Describe a point as an address; `Ok(None)` when nothing matched
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<String>>;
}

/// Persistence hand-off for assembled leads
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Persist a lead and return its identifier
    async fn persist_lead(&self, lead: &Lead) -> Result<LeadId>;

    /// Retrieve a previously persisted lead
    async fn get_lead(&self, id: LeadId) -> Result<Option<Lead>>;
}

#[async_trait]
impl<T: CandidateDirectory + ?Sized> CandidateDirectory for Arc<T> {
    async fn fetch_candidates(
        &self,
        zone: &Zone,
        discipline: Option<Discipline>,
    ) -> Result<Vec<ProfessionalCandidate>> {
        (**self).fetch_candidates(zone, discipline).await
    }
}

#[async_trait]
impl<T: Geocoder + ?Sized> Geocoder for Arc<T> {
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>> {
        (**self).geocode(address).await
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<String>> {
        (**self).reverse_geocode(point).await
    }
}

#[async_trait]
impl<T: LeadStore + ?Sized> LeadStore for Arc<T> {
    async fn persist_lead(&self, lead: &Lead) -> Result<LeadId> {
        (**self).persist_lead(lead).await
    }

    async fn get_lead(&self, id: LeadId) -> Result<Option<Lead>> {
        (**self).get_lead(id).await
    }
}
