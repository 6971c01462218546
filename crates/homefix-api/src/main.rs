use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use homefix_store::{GazetteerGeocoder, HttpGeocoder, MemoryCandidateDirectory, MemoryLeadStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homefix_api::state::{SharedDirectory, SharedGeocoder};
use homefix_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homefix_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();
    let config = api_config.pipeline_config().context("Failed to load configuration")?;

    tracing::info!(
        port = api_config.port,
        radius_km = config.radius_km.value,
        max_results = config.max_results.value,
        remote_classifier = ?config.remote_classifier_url.value,
        "Starting Homefix API server"
    );

    let directory: SharedDirectory = match &api_config.candidates_path {
        Some(path) => Arc::new(
            MemoryCandidateDirectory::load_json(path)
                .with_context(|| format!("Failed to load candidates from {}", path.display()))?,
        ),
        None => {
            tracing::warn!("HOMEFIX_CANDIDATES not set, starting with an empty directory");
            Arc::new(MemoryCandidateDirectory::new())
        }
    };

    let geocoder: SharedGeocoder = match (&config.geocoder_url.value, &api_config.gazetteer_path) {
        (Some(url), _) => {
            tracing::info!(url = %url, "Using HTTP geocoder");
            Arc::new(HttpGeocoder::new(
                url.clone(),
                Duration::from_millis(config.remote_timeout_ms.value),
            ))
        }
        (None, Some(path)) => Arc::new(
            GazetteerGeocoder::load_json(path)
                .with_context(|| format!("Failed to load gazetteer from {}", path.display()))?,
        ),
        (None, None) => Arc::new(GazetteerGeocoder::default()),
    };

    let state = Arc::new(AppState::new(
        &config,
        directory,
        geocoder,
        Arc::new(MemoryLeadStore::new()),
    ));

    let origin = api_config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid HOMEFIX_CORS_ORIGIN '{}'", api_config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", api_config.cors_origin);

    axum::serve(listener, app).await?;
    Ok(())
}
