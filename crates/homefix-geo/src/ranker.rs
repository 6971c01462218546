//! Radius-bounded, capacity-limited ranking of professional candidates.

use std::cmp::Ordering;

use homefix_core::config::DEFAULT_MAX_RESULTS;
use homefix_core::error::Result;
use homefix_core::models::{Discipline, GeoPoint, MatchResult, ProfessionalCandidate, Zone};
use homefix_core::ports::CandidateDirectory;

use crate::distance::distance_km;

/// Parameters of one ranking call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchQuery {
    pub origin: GeoPoint,
    pub radius_km: f64,
    pub max_results: usize,
    pub discipline: Option<Discipline>,
}

impl MatchQuery {
    /// Query with the default result cap and no discipline filter
    pub fn new(origin: GeoPoint, radius_km: f64) -> Self {
        Self { origin, radius_km, max_results: DEFAULT_MAX_RESULTS, discipline: None }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_discipline(mut self, discipline: Option<Discipline>) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn zone(&self) -> Zone {
        Zone::new(self.origin, self.radius_km)
    }

    /// A query that can never match anything
    fn is_empty(&self) -> bool {
        !self.radius_km.is_finite() || self.radius_km <= 0.0 || self.max_results == 0
    }
}

/// Rank `candidates` against `query`.
///
/// Candidates without coordinates, outside the radius, or of another
/// discipline are dropped. Survivors are ordered by distance, then rating
/// (missing lowest), then id, and cut to `max_results`. Duplicate ids are kept.
pub fn rank(query: &MatchQuery, candidates: &[ProfessionalCandidate]) -> Vec<MatchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = candidates
        .iter()
        .filter(|candidate| query.discipline.map_or(true, |d| candidate.discipline == d))
        .filter_map(|candidate| {
            let location = candidate.location?;
            let distance_km = distance_km(query.origin, location);
            (distance_km <= query.radius_km)
                .then(|| MatchResult { candidate: candidate.clone(), distance_km })
        })
        .collect();

    results.sort_by(compare_matches);
    results.truncate(query.max_results);
    results
}

fn compare_matches(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.distance_km
        .total_cmp(&b.distance_km)
        .then_with(|| rating_key(b).total_cmp(&rating_key(a)))
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}

fn rating_key(result: &MatchResult) -> f64 {
    result
        .candidate
        .rating_average
        .filter(|rating| rating.is_finite())
        .unwrap_or(f64::NEG_INFINITY)
}

/// Fetches a directory snapshot for a query and ranks it
pub struct MatchingService<D: CandidateDirectory> {
    directory: D,
}

impl<D: CandidateDirectory> MatchingService<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Directory failures are returned unchanged
    pub async fn find_matches(&self, query: &MatchQuery) -> Result<Vec<MatchResult>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let snapshot = self.directory.fetch_candidates(&query.zone(), query.discipline).await?;
        let results = rank(query, &snapshot);

        tracing::debug!(
            fetched = snapshot.len(),
            matched = results.len(),
            radius_km = query.radius_km,
            "Ranked candidates"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use homefix_core::HomefixError;

    /// Degrees of latitude per kilometer at R = 6371
    const DEG_PER_KM: f64 = 1.0 / 111.19492664455873;

    fn origin() -> GeoPoint {
        GeoPoint::new(19.43, -99.13).unwrap()
    }

    /// Candidate `km` kilometers due north of the origin
    fn north(id: &str, km: f64) -> ProfessionalCandidate {
        let location = GeoPoint::new(19.43 + km * DEG_PER_KM, -99.13).unwrap();
        ProfessionalCandidate::new(id, id.to_uppercase(), Discipline::Plumbing, Some(location))
    }

    fn ids(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.candidate.id.0.as_str()).collect()
    }

    #[test]
    fn test_radius_cutoff_and_order() {
        let candidates = vec![north("a", 2.0), north("b", 15.0), north("c", 8.0)];
        let results = rank(&MatchQuery::new(origin(), 10.0), &candidates);

        assert_eq!(ids(&results), vec!["a", "c"]);
        assert!((results[0].distance_km - 2.0).abs() < 1e-6);
        assert!((results[1].distance_km - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_max_results_keeps_nearest() {
        let candidates = vec![north("far", 5.0), north("near", 1.0)];
        let query = MatchQuery::new(origin(), 10.0).with_max_results(1);

        let results = rank(&query, &candidates);
        assert_eq!(ids(&results), vec!["near"]);
    }

    #[test]
    fn test_default_cap_is_fifty() {
        let candidates: Vec<_> =
            (0..80).map(|i| north(&format!("p{:02}", i), i as f64 * 0.1)).collect();
        let results = rank(&MatchQuery::new(origin(), 10.0), &candidates);
        assert_eq!(results.len(), DEFAULT_MAX_RESULTS);
        assert_eq!(results[0].candidate.id.0, "p00");
    }

    #[test]
    fn test_empty_and_degenerate_queries() {
        assert!(rank(&MatchQuery::new(origin(), 10.0), &[]).is_empty());

        let candidates = vec![north("here", 0.0)];
        assert!(rank(&MatchQuery::new(origin(), 0.0), &candidates).is_empty());
        assert!(rank(&MatchQuery::new(origin(), -3.0), &candidates).is_empty());
        assert!(rank(&MatchQuery::new(origin(), f64::NAN), &candidates).is_empty());
        assert!(rank(&MatchQuery::new(origin(), 10.0).with_max_results(0), &candidates).is_empty());
    }

    #[test]
    fn test_ties_broken_by_rating_then_id() {
        let candidates = vec![
            north("c-unrated", 3.0),
            north("b-good", 3.0).with_rating(4.9),
            north("a-ok", 3.0).with_rating(3.5),
            north("d-ok", 3.0).with_rating(3.5),
        ];
        let results = rank(&MatchQuery::new(origin(), 10.0), &candidates);
        assert_eq!(ids(&results), vec!["b-good", "a-ok", "d-ok", "c-unrated"]);
    }

    #[test]
    fn test_discipline_filter_is_exact() {
        let mut painter = north("painter", 1.0);
        painter.discipline = Discipline::Painting;
        let candidates = vec![painter, north("plumber", 2.0)];

        let query = MatchQuery::new(origin(), 10.0).with_discipline(Some(Discipline::Plumbing));
        assert_eq!(ids(&rank(&query, &candidates)), vec!["plumber"]);

        let query = MatchQuery::new(origin(), 10.0).with_discipline(Some(Discipline::General));
        assert!(rank(&query, &candidates).is_empty());
    }

    #[test]
    fn test_null_coordinates_and_duplicates() {
        let mut nowhere = north("nowhere", 1.0);
        nowhere.location = None;
        let candidates = vec![nowhere, north("dup", 1.0), north("dup", 1.0)];

        let results = rank(&MatchQuery::new(origin(), 10.0), &candidates);
        assert_eq!(ids(&results), vec!["dup", "dup"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let candidates = vec![north("b", 5.0), north("a", 1.0)];
        let before = candidates.clone();
        let _ = rank(&MatchQuery::new(origin(), 10.0), &candidates);
        assert_eq!(candidates, before);
    }

    struct FixedDirectory(Vec<ProfessionalCandidate>);

    #[async_trait]
    impl CandidateDirectory for FixedDirectory {
        async fn fetch_candidates(
            &self,
            _zone: &Zone,
            _discipline: Option<Discipline>,
        ) -> Result<Vec<ProfessionalCandidate>> {
            Ok(self.0.clone())
        }
    }

    struct FailingDirectory;

    #[async_trait]
    impl CandidateDirectory for FailingDirectory {
        async fn fetch_candidates(
            &self,
            _zone: &Zone,
            _discipline: Option<Discipline>,
        ) -> Result<Vec<ProfessionalCandidate>> {
            Err(HomefixError::Directory { reason: "connection reset".to_string() })
        }
    }

    #[tokio::test]
    async fn test_service_ranks_directory_snapshot() {
        let service =
            MatchingService::new(FixedDirectory(vec![north("b", 15.0), north("a", 2.0)]));
        let results = service.find_matches(&MatchQuery::new(origin(), 10.0)).await.unwrap();
        assert_eq!(ids(&results), vec!["a"]);
    }

    #[tokio::test]
    async fn test_service_propagates_directory_failure() {
        let service = MatchingService::new(FailingDirectory);
        let err = service.find_matches(&MatchQuery::new(origin(), 10.0)).await.unwrap_err();
        assert!(matches!(err, HomefixError::Directory { .. }));
    }
}
