//! Homefix Leads - lead assembly
//!
//! Validates a confirmed classification together with contact and location
//! details and hands the resulting [`Lead`](homefix_core::models::Lead) to
//! the persistence collaborator.

pub mod assembler;
pub mod service;

pub use assembler::{coordinates, LeadAssembler};
pub use service::LeadService;
