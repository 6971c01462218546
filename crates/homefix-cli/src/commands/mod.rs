//! Command implementations

mod classify;
mod config;
mod lead;
mod match_cmd;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::errors;
use crate::output::OutputWriter;
use anyhow::Result;
use homefix_classify::{ClassificationPipeline, HttpRemoteClassifier};
use homefix_core::config::LayeredConfig;
use homefix_core::models::Discipline;
use std::sync::Arc;
use std::time::Duration;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let mut overrides = cli.overrides();
    if let Commands::Match(args) = &cli.command {
        overrides.radius_km = args.radius;
        overrides.max_results = args.max_results;
    }
    let config = load_config(cli.config.as_deref(), overrides)?;

    match cli.command {
        Commands::Classify(args) => classify::execute(args, &config, &output).await,
        Commands::Match(args) => match_cmd::execute(args, &config, &output).await,
        Commands::Lead(args) => lead::execute(args, &config, &output).await,
        Commands::Config => config::execute(&config, &output),
    }
}

/// Remote-first pipeline when a classifier URL is configured, local otherwise
fn pipeline(config: &LayeredConfig) -> ClassificationPipeline {
    let timeout = Duration::from_millis(config.remote_timeout_ms.value);
    match &config.remote_classifier_url.value {
        Some(url) => ClassificationPipeline::with_remote(
            Arc::new(HttpRemoteClassifier::new(url.clone(), timeout)),
            timeout,
        ),
        None => ClassificationPipeline::local(),
    }
}

/// Blank counts as absent
fn parse_discipline(label: Option<&str>) -> Result<Option<Discipline>> {
    match label.map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => {
            let discipline =
                label.parse::<Discipline>().map_err(|_| errors::unknown_discipline(label))?;
            Ok(Some(discipline))
        }
        None => Ok(None),
    }
}
