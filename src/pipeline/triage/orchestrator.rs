//! Triage pipeline: generative source first, rule engine second,
//! sanitizer always.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::Instrument;
use uuid::Uuid;

use super::client::AiRecommendationClient;
use super::fallback::FallbackEngine;
use super::types::{RecommendationDraft, SymptomQuery, TriageResult, TriageSource};
use crate::config::TriageConfig;
use crate::pipeline::safety::sanitize_recommendation;

/// Anything that can propose a recommendation for a query.
///
/// `None` means "no usable answer"; the pipeline then falls back to the
/// rule engine.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn draft(&self, query: &SymptomQuery) -> Option<RecommendationDraft>;

    fn name(&self) -> &'static str;
}

pub struct TriagePipeline {
    primary: Arc<dyn RecommendationSource>,
    fallback: FallbackEngine,
}

impl TriagePipeline {
    pub fn new(primary: Arc<dyn RecommendationSource>, fallback: FallbackEngine) -> Self {
        Self { primary, fallback }
    }

    pub fn from_config(config: &TriageConfig) -> Self {
        Self::new(
            Arc::new(AiRecommendationClient::from_config(config)),
            FallbackEngine::builtin(),
        )
    }

    /// Full triage for one request. Never fails.
    pub async fn triage(&self, raw: &str) -> TriageResult {
        self.triage_with_source(raw).await.0
    }

    /// Like [`triage`](Self::triage), also reporting which path produced the result.
    pub async fn triage_with_source(&self, raw: &str) -> (TriageResult, TriageSource) {
        let request_id = Uuid::new_v4();
        self.run(raw)
            .instrument(tracing::info_span!("triage", %request_id))
            .await
    }

    async fn run(&self, raw: &str) -> (TriageResult, TriageSource) {
        let Some(query) = SymptomQuery::new(raw) else {
            tracing::info!("Empty symptom text, returning default recommendation");
            return (TriageResult::default_recommendation(), TriageSource::Default);
        };

        tracing::info!(chars = query.char_len(), "Triage started");

        let attempt = AssertUnwindSafe(self.primary.draft(&query))
            .catch_unwind()
            .await;

        let (draft, source) = match attempt {
            Ok(Some(draft)) => (draft, TriageSource::Ai),
            Ok(None) => {
                tracing::info!(source = self.primary.name(), "No usable AI answer, using fallback");
                (self.fallback.recommend(&query).into(), TriageSource::Fallback)
            }
            Err(_) => {
                tracing::error!(source = self.primary.name(), "AI path panicked, using fallback");
                (self.fallback.recommend(&query).into(), TriageSource::Fallback)
            }
        };

        let result = sanitize_recommendation(&draft);
        tracing::info!(
            source = source.as_str(),
            urgency = result.urgency_level.as_str(),
            doctor = %result.recommended_doctor,
            "Triage complete"
        );
        (result, source)
    }
}
