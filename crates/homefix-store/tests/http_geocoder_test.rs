//! HTTP geocoder against a local Nominatim-shaped server

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use homefix_core::models::GeoPoint;
use homefix_core::ports::Geocoder;
use homefix_core::HomefixError;
use homefix_store::HttpGeocoder;
use serde_json::{json, Value};

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("q").map(String::as_str) {
        Some("Zocalo, CDMX") => Json(json!([
            { "lat": "19.4326", "lon": "-99.1332", "display_name": "Zócalo, Ciudad de México" }
        ])),
        Some("garbage") => Json(json!([{ "lat": "north", "lon": "west" }])),
        _ => Json(json!([])),
    }
}

async fn reverse(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("lat").map(String::as_str) == Some("19.4326") {
        Json(json!({ "display_name": "Zócalo, Ciudad de México" }))
    } else {
        Json(json!({ "error": "Unable to geocode" }))
    }
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn geocoder() -> HttpGeocoder {
    let router = Router::new().route("/search", get(search)).route("/reverse", get(reverse));
    let addr = spawn(router).await;
    HttpGeocoder::new(format!("http://{}/", addr), Duration::from_secs(2))
}

#[tokio::test]
async fn test_geocode_found() {
    let point = geocoder().await.geocode("Zocalo, CDMX").await.unwrap().unwrap();
    assert_eq!(point, GeoPoint::new(19.4326, -99.1332).unwrap());
}

#[tokio::test]
async fn test_geocode_not_found() {
    assert_eq!(geocoder().await.geocode("Calle Falsa 123").await.unwrap(), None);
}

#[tokio::test]
async fn test_geocode_unparseable_coordinates() {
    let err = geocoder().await.geocode("garbage").await.unwrap_err();
    assert!(matches!(err, HomefixError::Geocoding { .. }));
}

#[tokio::test]
async fn test_reverse_geocode() {
    let geocoder = geocoder().await;

    let address = geocoder.reverse_geocode(GeoPoint::new(19.4326, -99.1332).unwrap()).await;
    assert_eq!(address.unwrap().as_deref(), Some("Zócalo, Ciudad de México"));

    let nothing = geocoder.reverse_geocode(GeoPoint::new(0.0, 0.0).unwrap()).await;
    assert_eq!(nothing.unwrap(), None);
}

#[tokio::test]
async fn test_server_error_is_geocoding_failure() {
    let router = Router::new().route("/search", get(|| async { StatusCode::TOO_MANY_REQUESTS }));
    let addr = spawn(router).await;
    let geocoder = HttpGeocoder::new(format!("http://{}", addr), Duration::from_secs(2));

    let err = geocoder.geocode("anything").await.unwrap_err();
    assert!(matches!(err, HomefixError::Geocoding { .. }));
}
