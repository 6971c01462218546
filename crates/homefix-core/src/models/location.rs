use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HomefixError, Result};

/// WGS 84 coordinate pair
///
/// Only constructible through [`GeoPoint::new`], so a `GeoPoint` value always
/// satisfies `-90 <= lat <= 90` and `-180 <= lng <= 180`. Deserialization
/// runs through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// `geo` points are (x = lng, y = lat)
impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.lng(), point.lat())
    }
}

impl GeoPoint {
    /// Create a validated point
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);

        if lat_ok && lng_ok {
            Ok(Self { lat, lng })
        } else {
            Err(HomefixError::InvalidCoordinates { lat, lng })
        }
    }

    /// Build from constants already known to be in range
    pub(crate) const fn from_trusted(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}

#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = HomefixError;

    fn try_from(raw: RawGeoPoint) -> Result<Self> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

/// Circular search area handed to the professional directory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl Zone {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }
}
