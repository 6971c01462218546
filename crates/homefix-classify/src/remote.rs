//! Remote classifier port and its HTTP adapter.

use std::time::Duration;

use async_trait::async_trait;
use homefix_core::models::{Classification, ClassificationSource, Discipline, Urgency};
use homefix_core::text::normalize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the remote classifier produced no result.
///
/// This is a value the pipeline inspects and logs, not an error it surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteUnavailable {
    #[error("remote classifier timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("remote classifier has no classification for this request")]
    NotFound,

    #[error("remote classifier unreachable: {0}")]
    Transport(String),

    #[error("remote classifier returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("remote classifier returned an unusable response: {0}")]
    InvalidResponse(String),
}

/// Input to one remote classification attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preselected_discipline: Option<Discipline>,
}

impl RemoteRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), image_ref: None, preselected_discipline: None }
    }

    pub fn with_image(mut self, image_ref: Option<String>) -> Self {
        self.image_ref = image_ref;
        self
    }

    pub fn with_preselected(mut self, discipline: Option<Discipline>) -> Self {
        self.preselected_discipline = discipline;
        self
    }
}

/// Port for an optional, external classification backend
#[async_trait]
pub trait RemoteClassifier: Send + Sync {
    /// Classify one request. Implementations make a single attempt.
    async fn classify(
        &self,
        request: &RemoteRequest,
    ) -> std::result::Result<Classification, RemoteUnavailable>;

    /// Identifier used in logs
    fn name(&self) -> &str;
}

/// HTTP adapter for a JSON classification endpoint
pub struct HttpRemoteClassifier {
    /// Base URL of the classification service (e.g., "http://localhost:8080")
    base_url: String,

    /// HTTP client with a request timeout applied
    client: reqwest::Client,

    timeout_ms: u64,
}

impl HttpRemoteClassifier {
    /// Create a new adapter with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            timeout_ms: timeout.as_millis() as u64,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RemoteClassifier for HttpRemoteClassifier {
    async fn classify(
        &self,
        request: &RemoteRequest,
    ) -> std::result::Result<Classification, RemoteUnavailable> {
        let response = self
            .client
            .post(format!("{}/classify", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RemoteUnavailable::Timeout { after_ms: self.timeout_ms }
                } else {
                    RemoteUnavailable::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteUnavailable::NotFound);
        }
        if !status.is_success() {
            return Err(RemoteUnavailable::Upstream { status: status.as_u16() });
        }

        let body: RemoteResponse = response
            .json()
            .await
            .map_err(|e| RemoteUnavailable::InvalidResponse(e.to_string()))?;

        body.into_classification(&request.text)
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}

/// Response body of the classification endpoint
#[derive(Debug, Deserialize)]
struct RemoteResponse {
    discipline: String,
    urgency: i64,
    diagnosis: String,
}

impl RemoteResponse {
    fn into_classification(
        self,
        text: &str,
    ) -> std::result::Result<Classification, RemoteUnavailable> {
        // An unfamiliar label degrades to the fallback rather than discarding the answer
        let discipline = self.discipline.parse().unwrap_or(Discipline::FALLBACK);

        let urgency = Urgency::new(self.urgency)
            .map_err(|e| RemoteUnavailable::InvalidResponse(e.to_string()))?;

        Classification::new(
            discipline,
            urgency,
            self.diagnosis,
            normalize(text),
            ClassificationSource::Remote,
        )
        .map_err(|e| RemoteUnavailable::InvalidResponse(e.to_string()))
    }
}
