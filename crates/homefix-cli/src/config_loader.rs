//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use homefix_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::Path;

/// Load layered configuration: defaults, optional file, environment, then CLI overrides
pub fn load_config(config_path: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_path {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);

    tracing::debug!(
        radius_km = config.radius_km.value,
        max_results = config.max_results.value,
        remote = config.remote_classifier_url.value.is_some(),
        "Configuration loaded"
    );
    Ok(config)
}
