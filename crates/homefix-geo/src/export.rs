//! GeoJSON rendering of match lists for map clients.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use homefix_core::models::{GeoPoint, MatchResult};
use serde_json::json;

/// One point feature per match, in ranking order. Properties carry the
/// rank (1-based), distance and profile fields.
pub fn matches_to_feature_collection(results: &[MatchResult]) -> FeatureCollection {
    let features = results
        .iter()
        .enumerate()
        .filter_map(|(index, result)| {
            let location = result.candidate.location?;
            Some(match_feature(index + 1, location, result))
        })
        .collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

fn match_feature(rank: usize, location: GeoPoint, result: &MatchResult) -> Feature {
    let candidate = &result.candidate;

    let mut properties = JsonObject::new();
    properties.insert("rank".to_string(), json!(rank));
    properties.insert("display_name".to_string(), json!(candidate.display_name));
    properties.insert("discipline".to_string(), json!(candidate.discipline));
    properties.insert("distance_km".to_string(), json!(result.distance_km));
    properties.insert("rating_average".to_string(), json!(candidate.rating_average));
    properties.insert("verified".to_string(), json!(candidate.verified));

    Feature {
        bbox: None,
        // GeoJSON positions are [lng, lat]
        geometry: Some(Geometry::new(Value::Point(vec![location.lng(), location.lat()]))),
        id: Some(geojson::feature::Id::String(candidate.id.0.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homefix_core::models::{Discipline, ProfessionalCandidate};

    #[test]
    fn test_features_follow_ranking_order() {
        let near = GeoPoint::new(19.44, -99.13).unwrap();
        let far = GeoPoint::new(19.48, -99.13).unwrap();
        let results = vec![
            MatchResult {
                candidate: ProfessionalCandidate::new("p1", "Ana", Discipline::Plumbing, Some(near))
                    .with_rating(4.5),
                distance_km: 1.1,
            },
            MatchResult {
                candidate: ProfessionalCandidate::new("p2", "Luis", Discipline::Plumbing, Some(far)),
                distance_km: 5.6,
            },
        ];

        let collection = matches_to_feature_collection(&results);
        assert_eq!(collection.features.len(), 2);

        let first = &collection.features[0];
        assert_eq!(first.id, Some(geojson::feature::Id::String("p1".to_string())));
        let props = first.properties.as_ref().unwrap();
        assert_eq!(props["rank"], 1);
        assert_eq!(props["discipline"], "plumbing");
        assert_eq!(props["rating_average"], 4.5);

        match &first.geometry.as_ref().unwrap().value {
            Value::Point(position) => assert_eq!(position, &vec![-99.13, 19.44]),
            other => panic!("expected point, got {:?}", other),
        }

        let second = collection.features[1].properties.as_ref().unwrap();
        assert!(second["rating_average"].is_null());
    }

    #[test]
    fn test_serializes_as_feature_collection() {
        let json = serde_json::to_value(matches_to_feature_collection(&[])).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"], serde_json::json!([]));
    }
}
