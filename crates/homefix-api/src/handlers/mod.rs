mod classify;
mod health;
mod leads;
mod matching;

pub use classify::classify;
pub use health::health_check;
pub use leads::{get_lead, submit_lead};
pub use matching::{find_matches, find_matches_geojson};
