mod classify;
mod leads;
mod matching;

pub use classify::{parse_discipline, ClassifyService};
pub use leads::LeadSubmissionService;
pub use matching::MatchService;
