//! Router tests driven through `tower::ServiceExt::oneshot`

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use homefix_api::{create_router, AppState};
use homefix_core::config::LayeredConfig;
use homefix_core::models::{Discipline, GeoPoint, ProfessionalCandidate};
use homefix_store::gazetteer::GazetteerEntry;
use homefix_store::{GazetteerGeocoder, MemoryCandidateDirectory, MemoryLeadStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).unwrap()
}

fn app() -> Router {
    let directory = MemoryCandidateDirectory::from_candidates(vec![
        ProfessionalCandidate::new("near", "Ana", Discipline::Plumbing, Some(point(19.44, -99.13)))
            .with_rating(4.7),
        ProfessionalCandidate::new("mid", "Beto", Discipline::Plumbing, Some(point(19.49, -99.13))),
        ProfessionalCandidate::new("sparky", "Carla", Discipline::Electrical, Some(point(19.43, -99.14))),
        ProfessionalCandidate::new("far", "Dario", Discipline::Plumbing, Some(point(19.60, -99.13))),
    ]);
    let geocoder = GazetteerGeocoder::new(vec![GazetteerEntry {
        address: "Coyoacán".to_string(),
        point: point(19.35, -99.162),
    }]);

    let state = AppState::new(
        &LayeredConfig::with_defaults(),
        Arc::new(directory),
        Arc::new(geocoder),
        Arc::new(MemoryLeadStore::new()),
    );
    create_router(Arc::new(state))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["remote_classifier"], false);
}

#[tokio::test]
async fn test_classify_title_override_with_urgency() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/classify",
        Some(json!({ "text": "se me poncho un cable, necesito un electricista urgente" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["discipline"], "electrical");
    assert_eq!(body["urgency"], 8);
    assert_eq!(body["diagnosis"], "Electrical service");
    assert_eq!(body["source"], "local");
}

#[tokio::test]
async fn test_classify_with_preselection() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/classify",
        Some(json!({ "text": "tengo fuga en el baño", "preselected_discipline": "painting" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["discipline"], "painting");
}

#[tokio::test]
async fn test_classify_unknown_preselection() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/classify",
        Some(json!({ "text": "hola", "preselected_discipline": "astrology" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "preselected_discipline");
}

#[tokio::test]
async fn test_match_ranks_and_filters() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/match",
        Some(json!({
            "origin": { "lat": 19.43, "lng": -99.13 },
            "radius_km": 10.0,
            "discipline": "plumbing"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> =
        body.as_array().unwrap().iter().map(|r| r["candidate"]["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["near", "mid"]);
    assert!(body[0]["distance_km"].as_f64().unwrap() < body[1]["distance_km"].as_f64().unwrap());
}

#[tokio::test]
async fn test_match_respects_max_results() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/match",
        Some(json!({ "origin": { "lat": 19.43, "lng": -99.13 }, "max_results": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_match_invalid_origin() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/match",
        Some(json!({ "origin": { "lat": 95.0, "lng": -99.13 } })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "origin");
}

#[tokio::test]
async fn test_match_geojson() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/match/geojson",
        Some(json!({ "origin": { "lat": 19.43, "lng": -99.13 }, "radius_km": 3.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "FeatureCollection");
    assert_eq!(body["features"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_lead_round_trip() {
    let app = app();
    let (status, created) = send(
        &app,
        "POST",
        "/api/v1/leads",
        Some(json!({
            "contact": { "name": "María", "phone": "5512345678" },
            "location": { "lat": 19.43, "lng": -99.13 },
            "description": "tengo fuga en el baño",
            "priority_tier": true
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["location_approximate"], false);

    let id = created["id"].as_str().unwrap();
    let (status, lead) = send(&app, "GET", &format!("/api/v1/leads/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lead["discipline"], "plumbing");
    assert_eq!(lead["contact_phone"], "5512345678");
    assert_eq!(lead["priority_boost"], true);
}

#[tokio::test]
async fn test_lead_with_unknown_address_is_approximate() {
    let (status, created) = send(
        &app(),
        "POST",
        "/api/v1/leads",
        Some(json!({
            "contact": { "name": "Luis", "phone": "5599990000" },
            "location": { "address": "Calle Falsa 123" },
            "classification": { "discipline": "locksmith", "urgency": 9, "diagnosis": "Locked out" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["location_approximate"], true);
}

#[tokio::test]
async fn test_lead_missing_phone() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/leads",
        Some(json!({
            "contact": { "name": "", "phone": "" },
            "location": { "lat": 19.43, "lng": -99.13 },
            "description": "fuga"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "contact.phone");
}

#[tokio::test]
async fn test_lead_without_classification_or_text() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/v1/leads",
        Some(json!({
            "contact": { "name": "Eva", "phone": "5511112222" },
            "location": { "address": "Coyoacan" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "classification.discipline");
}

#[tokio::test]
async fn test_unknown_lead_is_not_found() {
    let uri = format!("/api/v1/leads/{}", uuid_nil());
    let (status, _) = send(&app(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn uuid_nil() -> &'static str {
    "00000000-0000-0000-0000-000000000000"
}
