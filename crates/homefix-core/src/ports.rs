//! Port trait definitions
//!
//! These traits define the external collaborators the matching core talks to.
//! Adapters live in `homefix-store` and `homefix-classify`.

pub mod collaborators;

pub use collaborators::{CandidateDirectory, Geocoder, LeadStore};
