use std::env;
use std::path::PathBuf;

use homefix_core::config::LayeredConfig;
use homefix_core::Result;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    /// JSON seed file for the in-memory professional directory
    pub candidates_path: Option<PathBuf>,
    /// JSON place list for the offline geocoder
    pub gazetteer_path: Option<PathBuf>,
    /// Optional TOML file layered under the environment
    pub config_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("HOMEFIX_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

        let cors_origin =
            env::var("HOMEFIX_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            port,
            cors_origin,
            candidates_path: env::var_os("HOMEFIX_CANDIDATES").map(PathBuf::from),
            gazetteer_path: env::var_os("HOMEFIX_GAZETTEER").map(PathBuf::from),
            config_path: env::var_os("HOMEFIX_CONFIG").map(PathBuf::from),
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Matching and classification settings: defaults, then the TOML file, then the environment
    pub fn pipeline_config(&self) -> Result<LayeredConfig> {
        let mut config = LayeredConfig::with_defaults();
        if let Some(path) = &self.config_path {
            config = config.load_from_file(path)?;
        }
        Ok(config.load_from_env())
    }
}
