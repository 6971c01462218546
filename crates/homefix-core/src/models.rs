pub mod candidate;
pub mod classification;
pub mod discipline;
pub mod draft;
pub mod lead;
pub mod location;

pub use candidate::{CandidateId, MatchResult, ProfessionalCandidate};
pub use classification::{Classification, ClassificationSource, Urgency};
pub use discipline::Discipline;
pub use draft::ServiceRequestDraft;
pub use lead::{Contact, Lead, LeadId, LeadRequest, LocationInput, ResolvedLocation};
pub use location::{GeoPoint, Zone};
