//! Best-effort remote classification with a local fallback.

use std::sync::Arc;
use std::time::Duration;

use homefix_core::models::{Classification, Discipline, ServiceRequestDraft};

use crate::intent;
use crate::remote::{RemoteClassifier, RemoteRequest, RemoteUnavailable};

/// Runs one classification cycle: a single remote attempt bounded by a
/// timeout, then the local classifier if the remote produced nothing.
#[derive(Clone)]
pub struct ClassificationPipeline {
    remote: Option<Arc<dyn RemoteClassifier>>,
    timeout: Duration,
}

impl ClassificationPipeline {
    /// Pipeline that only uses the local classifier
    pub fn local() -> Self {
        Self { remote: None, timeout: Duration::ZERO }
    }

    /// Pipeline that tries `remote` first
    pub fn with_remote(remote: Arc<dyn RemoteClassifier>, timeout: Duration) -> Self {
        Self { remote: Some(remote), timeout }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Classify `text`. Never fails.
    pub async fn classify(
        &self,
        text: &str,
        image_ref: Option<&str>,
        preselected: Option<Discipline>,
    ) -> Classification {
        if let Some(remote) = &self.remote {
            let request = RemoteRequest::new(text)
                .with_image(image_ref.map(str::to_string))
                .with_preselected(preselected);

            match self.attempt(remote.as_ref(), &request).await {
                Ok(classification) => {
                    tracing::debug!(
                        remote = remote.name(),
                        discipline = %classification.discipline(),
                        "Remote classification accepted"
                    );
                    return match preselected {
                        Some(discipline) => classification.with_discipline(discipline),
                        None => classification,
                    };
                }
                Err(reason) => {
                    tracing::warn!(
                        remote = remote.name(),
                        reason = %reason,
                        "Remote classifier unavailable, using local classifier"
                    );
                }
            }
        }

        intent::classify(text, preselected)
    }

    /// Classify everything the draft has accumulated so far
    pub async fn classify_draft(&self, draft: &ServiceRequestDraft) -> Classification {
        self.classify(&draft.combined_text(), draft.image_ref.as_deref(), draft.preselected)
            .await
    }

    async fn attempt(
        &self,
        remote: &dyn RemoteClassifier,
        request: &RemoteRequest,
    ) -> std::result::Result<Classification, RemoteUnavailable> {
        match tokio::time::timeout(self.timeout, remote.classify(request)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteUnavailable::Timeout { after_ms: self.timeout.as_millis() as u64 }),
        }
    }
}

impl Default for ClassificationPipeline {
    fn default() -> Self {
        Self::local()
    }
}
