use homefix_core::error::Result;
use homefix_core::models::{Classification, Lead, LeadId, LeadRequest};
use homefix_core::ports::{Geocoder, LeadStore};

use crate::assembler::LeadAssembler;

/// Assembles leads and hands them to the lead store
pub struct LeadService<G: Geocoder, S: LeadStore> {
    assembler: LeadAssembler<G>,
    store: S,
}

impl<G: Geocoder, S: LeadStore> LeadService<G, S> {
    pub fn new(assembler: LeadAssembler<G>, store: S) -> Self {
        Self { assembler, store }
    }

    pub fn assembler(&self) -> &LeadAssembler<G> {
        &self.assembler
    }

    /// Validate, assemble and persist a lead.
    ///
    /// Validation failures come back as `HomefixError::Validation`. Store
    /// failures are returned as-is and never retried here.
    pub async fn submit(
        &self,
        classification: Option<&Classification>,
        request: LeadRequest,
    ) -> Result<Lead> {
        let lead = self.assembler.assemble(classification, request).await?;
        let id = self.store.persist_lead(&lead).await?;

        tracing::info!(lead_id = %id, "Lead persisted");
        Ok(lead)
    }

    pub async fn get(&self, id: LeadId) -> Result<Option<Lead>> {
        self.store.get_lead(id).await
    }
}
