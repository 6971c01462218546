mod request;
mod response;

pub use request::{
    ClassificationBody, ClassifyRequest, LeadBody, LocationBody, MatchRequest, PointBody,
};
pub use response::{HealthResponse, LeadCreatedResponse};
