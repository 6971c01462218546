//! Geocoder for Nominatim-compatible HTTP services.

use std::time::Duration;

use async_trait::async_trait;
use homefix_core::error::{HomefixError, Result};
use homefix_core::models::GeoPoint;
use homefix_core::ports::Geocoder;
use serde::Deserialize;

const USER_AGENT: &str = concat!("homefix/", env!("CARGO_PKG_VERSION"));

/// HTTP geocoder using the `/search` and `/reverse` endpoints
pub struct HttpGeocoder {
    /// Base URL of the geocoding service (e.g., "https://nominatim.openstreetmap.org")
    base_url: String,

    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct ReverseHit {
    display_name: Option<String>,
}

impl HttpGeocoder {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { base_url: base_url.into().trim_end_matches('/').to_string(), client }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|e| HomefixError::Geocoding { reason: e.to_string() })?;

        if !response.status().is_success() {
            return Err(HomefixError::Geocoding {
                reason: format!("HTTP {}", response.status().as_u16()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| HomefixError::Geocoding { reason: format!("invalid response: {}", e) })
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>> {
        let query = [
            ("q", address.to_string()),
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
        ];
        let hits: Vec<SearchHit> = self.get_json("/search", &query).await?;

        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let lat = hit.lat.parse::<f64>();
        let lng = hit.lon.parse::<f64>();
        match (lat, lng) {
            (Ok(lat), Ok(lng)) => GeoPoint::new(lat, lng).map(Some),
            _ => Err(HomefixError::Geocoding {
                reason: format!("unparseable coordinates ({}, {})", hit.lat, hit.lon),
            }),
        }
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<String>> {
        let query = [
            ("lat", point.lat().to_string()),
            ("lon", point.lng().to_string()),
            ("format", "json".to_string()),
        ];
        // Nominatim answers 200 with an `error` field when nothing is found
        let hit: ReverseHit = self.get_json("/reverse", &query).await?;
        Ok(hit.display_name)
    }
}
