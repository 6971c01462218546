use homefix_core::models::{GeoPoint, MatchResult};
use homefix_geo::MatchQuery;

use crate::dto::MatchRequest;
use crate::error::ApiError;
use crate::services::parse_discipline;
use crate::state::{AppState, MatchDefaults};

/// Service for ranking nearby professionals
pub struct MatchService;

impl MatchService {
    pub async fn execute(
        state: &AppState,
        request: &MatchRequest,
    ) -> Result<Vec<MatchResult>, ApiError> {
        let query = Self::query_from(request, state.match_defaults)?;
        Ok(state.matching.find_matches(&query).await?)
    }

    /// Validate the request body into a query, filling in defaults
    pub fn query_from(request: &MatchRequest, defaults: MatchDefaults) -> Result<MatchQuery, ApiError> {
        let origin = GeoPoint::new(request.origin.lat, request.origin.lng)
            .map_err(|e| ApiError::from(e).at_field("origin"))?;
        let discipline = parse_discipline(request.discipline.as_deref(), "discipline")?;

        Ok(MatchQuery::new(origin, request.radius_km.unwrap_or(defaults.radius_km))
            .with_max_results(request.max_results.unwrap_or(defaults.max_results))
            .with_discipline(discipline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::PointBody;
    use axum::http::StatusCode;
    use homefix_core::models::Discipline;

    fn defaults() -> MatchDefaults {
        MatchDefaults { radius_km: 10.0, max_results: 50 }
    }

    fn request(lat: f64, discipline: Option<&str>) -> MatchRequest {
        MatchRequest {
            origin: PointBody { lat, lng: -99.13 },
            radius_km: None,
            max_results: Some(5),
            discipline: discipline.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let query = MatchService::query_from(&request(19.43, Some("Plomería")), defaults()).unwrap();
        assert_eq!(query.radius_km, 10.0);
        assert_eq!(query.max_results, 5);
        assert_eq!(query.discipline, Some(Discipline::Plumbing));
    }

    #[test]
    fn test_invalid_origin_names_field() {
        let err = MatchService::query_from(&request(123.0, None), defaults()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.field.as_deref(), Some("origin"));
    }

    #[test]
    fn test_unknown_discipline_names_field() {
        let err = MatchService::query_from(&request(19.43, Some("astrology")), defaults()).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("discipline"));
    }
}
