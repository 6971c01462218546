use crate::error::{HomefixError, Result};
use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default matching radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Default cap on the number of ranked matches returned
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default remote classifier timeout in milliseconds
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 2000;

/// Point substituted when an address cannot be geocoded (Mexico City centre)
pub const DEFAULT_FALLBACK_POINT: (f64, f64) = (19.4326, -99.1332);

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the classification and matching pipeline
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub radius_km: ConfigValue<f64>,
    pub max_results: ConfigValue<usize>,
    pub remote_classifier_url: ConfigValue<Option<String>>,
    pub remote_timeout_ms: ConfigValue<u64>,
    pub fallback_location: ConfigValue<GeoPoint>,
    pub geocoder_url: ConfigValue<Option<String>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let (lat, lng) = DEFAULT_FALLBACK_POINT;
        let fallback = GeoPoint::from_trusted(lat, lng);

        Self {
            radius_km: ConfigValue::new(DEFAULT_RADIUS_KM, ConfigSource::Default),
            max_results: ConfigValue::new(DEFAULT_MAX_RESULTS, ConfigSource::Default),
            remote_classifier_url: ConfigValue::new(None, ConfigSource::Default),
            remote_timeout_ms: ConfigValue::new(DEFAULT_REMOTE_TIMEOUT_MS, ConfigSource::Default),
            fallback_location: ConfigValue::new(fallback, ConfigSource::Default),
            geocoder_url: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| HomefixError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| HomefixError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(radius_km) = file_config.radius_km {
            if !(radius_km.is_finite() && radius_km > 0.0) {
                return Err(HomefixError::ConfigInvalid {
                    key: "radius_km".to_string(),
                    reason: format!("Invalid radius: {}. Use a positive number of kilometers", radius_km),
                });
            }
            self.radius_km.update(radius_km, ConfigSource::File);
        }

        if let Some(max_results) = file_config.max_results {
            self.max_results.update(max_results, ConfigSource::File);
        }

        if let Some(url) = file_config.remote_classifier_url {
            self.remote_classifier_url.update(Some(url), ConfigSource::File);
        }

        if let Some(timeout) = file_config.remote_timeout_ms {
            if timeout == 0 {
                return Err(HomefixError::ConfigInvalid {
                    key: "remote_timeout_ms".to_string(),
                    reason: "Invalid timeout: 0. Use a positive number of milliseconds".to_string(),
                });
            }
            self.remote_timeout_ms.update(timeout, ConfigSource::File);
        }

        match (file_config.fallback_lat, file_config.fallback_lng) {
            (Some(lat), Some(lng)) => {
                let point = GeoPoint::new(lat, lng).map_err(|e| HomefixError::ConfigInvalid {
                    key: "fallback_location".to_string(),
                    reason: e.to_string(),
                })?;
                self.fallback_location.update(point, ConfigSource::File);
            }
            (None, None) => {}
            _ => {
                return Err(HomefixError::ConfigInvalid {
                    key: "fallback_location".to_string(),
                    reason: "fallback_lat and fallback_lng must be set together".to_string(),
                })
            }
        }

        if let Some(url) = file_config.geocoder_url {
            self.geocoder_url.update(Some(url), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // HOMEFIX_RADIUS_KM
        if let Ok(radius_str) = env::var("HOMEFIX_RADIUS_KM") {
            match parse_radius(&radius_str) {
                Ok(radius) => self.radius_km.update(radius, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid HOMEFIX_RADIUS_KM value '{}': expected a positive number of kilometers",
                    radius_str
                ),
            }
        }

        // HOMEFIX_MAX_RESULTS
        if let Ok(max_str) = env::var("HOMEFIX_MAX_RESULTS") {
            match max_str.parse::<usize>() {
                Ok(max) => self.max_results.update(max, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid HOMEFIX_MAX_RESULTS value '{}': expected a non-negative integer",
                    max_str
                ),
            }
        }

        // HOMEFIX_REMOTE_CLASSIFIER_URL
        if let Ok(url) = env::var("HOMEFIX_REMOTE_CLASSIFIER_URL") {
            self.remote_classifier_url.update(Some(url), ConfigSource::Environment);
        }

        // HOMEFIX_REMOTE_TIMEOUT_MS
        if let Ok(timeout_str) = env::var("HOMEFIX_REMOTE_TIMEOUT_MS") {
            match parse_timeout_ms(&timeout_str) {
                Ok(timeout) => self.remote_timeout_ms.update(timeout, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid HOMEFIX_REMOTE_TIMEOUT_MS value '{}': expected a positive number of milliseconds",
                    timeout_str
                ),
            }
        }

        // HOMEFIX_FALLBACK_LAT / HOMEFIX_FALLBACK_LNG
        if let (Ok(lat_str), Ok(lng_str)) =
            (env::var("HOMEFIX_FALLBACK_LAT"), env::var("HOMEFIX_FALLBACK_LNG"))
        {
            match parse_point(&lat_str, &lng_str) {
                Ok(point) => self.fallback_location.update(point, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid HOMEFIX_FALLBACK_LAT/LNG values '{}', '{}': expected WGS 84 degrees",
                    lat_str,
                    lng_str
                ),
            }
        }

        // HOMEFIX_GEOCODER_URL
        if let Ok(url) = env::var("HOMEFIX_GEOCODER_URL") {
            self.geocoder_url.update(Some(url), ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(radius_km) = overrides.radius_km {
            self.radius_km.update(radius_km, ConfigSource::Cli);
        }

        if let Some(max_results) = overrides.max_results {
            self.max_results.update(max_results, ConfigSource::Cli);
        }

        if let Some(url) = overrides.remote_classifier_url {
            self.remote_classifier_url.update(Some(url), ConfigSource::Cli);
        }

        match overrides.remote_timeout_ms {
            Some(0) => tracing::warn!("Ignoring remote timeout of 0 ms: expected a positive value"),
            Some(timeout) => self.remote_timeout_ms.update(timeout, ConfigSource::Cli),
            None => {}
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "radius_km".to_string(),
            (format!("{}", self.radius_km.value), self.radius_km.source),
        );

        map.insert(
            "max_results".to_string(),
            (self.max_results.value.to_string(), self.max_results.source),
        );

        map.insert(
            "remote_classifier_url".to_string(),
            (
                self.remote_classifier_url.value.clone().unwrap_or_else(|| "(disabled)".to_string()),
                self.remote_classifier_url.source,
            ),
        );

        map.insert(
            "remote_timeout_ms".to_string(),
            (self.remote_timeout_ms.value.to_string(), self.remote_timeout_ms.source),
        );

        map.insert(
            "fallback_location".to_string(),
            (self.fallback_location.value.to_string(), self.fallback_location.source),
        );

        map.insert(
            "geocoder_url".to_string(),
            (
                self.geocoder_url.value.clone().unwrap_or_else(|| "(gazetteer)".to_string()),
                self.geocoder_url.source,
            ),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    radius_km: Option<f64>,
    max_results: Option<usize>,
    remote_classifier_url: Option<String>,
    remote_timeout_ms: Option<u64>,
    fallback_lat: Option<f64>,
    fallback_lng: Option<f64>,
    geocoder_url: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub radius_km: Option<f64>,
    pub max_results: Option<usize>,
    pub remote_classifier_url: Option<String>,
    pub remote_timeout_ms: Option<u64>,
}

/// Parse a matching radius in kilometers
pub fn parse_radius(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(radius) if radius.is_finite() && radius > 0.0 => Ok(radius),
        _ => Err(HomefixError::ConfigInvalid {
            key: "radius_km".to_string(),
            reason: format!("Invalid radius: {}. Use a positive number of kilometers", s),
        }),
    }
}

/// Parse a remote classifier timeout; zero would skip every remote call
pub fn parse_timeout_ms(s: &str) -> Result<u64> {
    match s.trim().parse::<u64>() {
        Ok(timeout) if timeout > 0 => Ok(timeout),
        _ => Err(HomefixError::ConfigInvalid {
            key: "remote_timeout_ms".to_string(),
            reason: format!("Invalid timeout: {}. Use a positive number of milliseconds", s),
        }),
    }
}

/// Parse a latitude/longitude pair into a validated point
pub fn parse_point(lat: &str, lng: &str) -> Result<GeoPoint> {
    let parse = |key: &str, value: &str| {
        value.trim().parse::<f64>().map_err(|_| HomefixError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("Invalid coordinate: {}", value),
        })
    };

    GeoPoint::new(parse("lat", lat)?, parse("lng", lng)?)
}
