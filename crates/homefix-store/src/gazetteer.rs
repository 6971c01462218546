//! Offline geocoder backed by a fixed list of named places.

use async_trait::async_trait;
use homefix_core::error::Result;
use homefix_core::models::GeoPoint;
use homefix_core::ports::Geocoder;
use homefix_core::text::{contains_phrase, normalize};
use homefix_geo::distance_km;
use serde::Deserialize;
use std::path::Path;

/// Reverse lookups only answer within this distance of an entry
pub const REVERSE_MATCH_KM: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GazetteerEntry {
    pub address: String,
    pub point: GeoPoint,
}

/// Resolves addresses against known place names.
///
/// An exact (normalized) match wins; otherwise the longest known name that
/// appears inside the address is used.
#[derive(Debug, Clone, Default)]
pub struct GazetteerGeocoder {
    entries: Vec<(String, GazetteerEntry)>,
}

impl GazetteerGeocoder {
    pub fn new(entries: Vec<GazetteerEntry>) -> Self {
        let entries = entries.into_iter().map(|entry| (normalize(&entry.address), entry)).collect();
        Self { entries }
    }

    /// Load a JSON array of `{address, point: {lat, lng}}` entries
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<GazetteerEntry> = serde_json::from_str(&content)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, address: &str) -> Option<GeoPoint> {
        let needle = normalize(address);
        if needle.is_empty() {
            return None;
        }

        if let Some((_, entry)) = self.entries.iter().find(|(name, _)| *name == needle) {
            return Some(entry.point);
        }

        self.entries
            .iter()
            .filter(|(name, _)| contains_phrase(&needle, name))
            .max_by_key(|(name, _)| name.len())
            .map(|(_, entry)| entry.point)
    }

    fn nearest(&self, point: GeoPoint) -> Option<&GazetteerEntry> {
        self.entries
            .iter()
            .map(|(_, entry)| (distance_km(point, entry.point), entry))
            .filter(|(distance, _)| *distance <= REVERSE_MATCH_KM)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, entry)| entry)
    }
}

#[async_trait]
impl Geocoder for GazetteerGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>> {
        Ok(self.lookup(address))
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<String>> {
        Ok(self.nearest(point).map(|entry| entry.address.clone()))
    }
}
