use std::sync::Arc;
use std::time::Duration;

use homefix_classify::{ClassificationPipeline, HttpRemoteClassifier};
use homefix_core::config::LayeredConfig;
use homefix_core::ports::{CandidateDirectory, Geocoder, LeadStore};
use homefix_geo::MatchingService;
use homefix_leads::{LeadAssembler, LeadService};

pub type SharedDirectory = Arc<dyn CandidateDirectory>;
pub type SharedGeocoder = Arc<dyn Geocoder>;
pub type SharedLeadStore = Arc<dyn LeadStore>;

/// Defaults applied to match requests that leave them out
#[derive(Debug, Clone, Copy)]
pub struct MatchDefaults {
    pub radius_km: f64,
    pub max_results: usize,
}

pub struct AppState {
    pub classifier: ClassificationPipeline,
    pub matching: MatchingService<SharedDirectory>,
    pub leads: LeadService<SharedGeocoder, SharedLeadStore>,
    pub match_defaults: MatchDefaults,
}

impl AppState {
    pub fn new(
        config: &LayeredConfig,
        directory: SharedDirectory,
        geocoder: SharedGeocoder,
        store: SharedLeadStore,
    ) -> Self {
        let timeout = Duration::from_millis(config.remote_timeout_ms.value);
        let classifier = match &config.remote_classifier_url.value {
            Some(url) => ClassificationPipeline::with_remote(
                Arc::new(HttpRemoteClassifier::new(url.clone(), timeout)),
                timeout,
            ),
            None => ClassificationPipeline::local(),
        };

        let assembler = LeadAssembler::new(geocoder, config.fallback_location.value);

        Self {
            classifier,
            matching: MatchingService::new(directory),
            leads: LeadService::new(assembler, store),
            match_defaults: MatchDefaults {
                radius_km: config.radius_km.value,
                max_results: config.max_results.value,
            },
        }
    }
}
