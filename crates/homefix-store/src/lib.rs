//! Homefix Store - collaborator adapters
//!
//! Implementations of the directory, lead store and geocoder ports: in-memory
//! adapters for development and tests, plus an HTTP geocoder for
//! Nominatim-compatible services.

pub mod gazetteer;
pub mod http_geocoder;
pub mod memory;

pub use gazetteer::GazetteerGeocoder;
pub use http_geocoder::HttpGeocoder;
pub use memory::{MemoryCandidateDirectory, MemoryLeadStore};
