//! Homefix Geo - distance and candidate ranking
//!
//! Great-circle distance between validated points, and the radius-bounded
//! ranking that turns a directory snapshot into an ordered match list.

pub mod distance;
pub mod export;
pub mod ranker;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use export::matches_to_feature_collection;
pub use ranker::{rank, MatchQuery, MatchingService};
