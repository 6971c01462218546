//! Homefix Classify - request classification
//!
//! Turns free text into a [`Classification`](homefix_core::models::Classification):
//! an optional remote classifier is tried first and the local keyword
//! classifier answers whenever the remote cannot.

pub mod intent;
pub mod lexicon;
pub mod pipeline;
pub mod remote;

pub use intent::{classify, score, DisciplineScore, WorkKind};
pub use pipeline::ClassificationPipeline;
pub use remote::{HttpRemoteClassifier, RemoteClassifier, RemoteRequest, RemoteUnavailable};
