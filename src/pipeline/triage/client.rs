//! AI recommendation client: one prompt, ordered model attempts.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::extract::{extract_json_from_text, is_acceptable};
use super::gemini::GeminiBackend;
use super::orchestrator::RecommendationSource;
use super::prompt::build_triage_prompt;
use super::types::{ModelConfig, RecommendationDraft, SymptomQuery};
use super::TriageError;
use crate::config::TriageConfig;
use crate::pipeline::safety::{guard_symptom_input, MAX_PROMPT_INPUT_CHARS};

/// A text-generation service addressed by model.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, model: &ModelConfig, prompt: &str) -> Result<String, TriageError>;
}

pub struct AiRecommendationClient {
    /// `None` when no credential is configured; every call short-circuits.
    backend: Option<Arc<dyn GenerativeBackend>>,
    models: Vec<ModelConfig>,
    attempt_timeout: Option<Duration>,
}

impl AiRecommendationClient {
    pub fn new(
        backend: Option<Arc<dyn GenerativeBackend>>,
        models: Vec<ModelConfig>,
        attempt_timeout: Option<Duration>,
    ) -> Self {
        Self {
            backend,
            models,
            attempt_timeout,
        }
    }

    /// Build from configuration. A missing key, or a client that fails to
    /// build, leaves the AI path disabled.
    pub fn from_config(config: &TriageConfig) -> Self {
        let backend = config.gemini_api_key.as_deref().and_then(|key| {
            match GeminiBackend::new(key, &config.gemini_base_url, config.ai_timeout) {
                Ok(backend) => Some(Arc::new(backend) as Arc<dyn GenerativeBackend>),
                Err(e) => {
                    tracing::warn!(error = %e, "Gemini backend unavailable, AI path disabled");
                    None
                }
            }
        });
        Self::new(backend, config.models.clone(), config.ai_timeout)
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn models(&self) -> &[ModelConfig] {
        &self.models
    }

    /// Try each model in order and return the first acceptable JSON object.
    ///
    /// Attempts are sequential: a later model is only called once the
    /// previous one has failed. Returns `None` without any network call
    /// when no backend is configured.
    pub async fn recommend(&self, prompt: &str) -> Option<Value> {
        let backend = self.backend.as_ref()?;

        for (index, model) in self.models.iter().enumerate() {
            match self.attempt(backend.as_ref(), model, prompt).await {
                Ok(text) => match extract_json_from_text(&text) {
                    Some(value) if is_acceptable(&value) => {
                        tracing::info!(model = %model, attempt = index + 1, "AI recommendation accepted");
                        return Some(value);
                    }
                    _ => {
                        tracing::warn!(
                            model = %model,
                            response_chars = text.chars().count(),
                            "AI response not usable, trying next model"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(model = %model, error = %e, "AI model attempt failed");
                }
            }
        }

        tracing::warn!(models = self.models.len(), "All AI models exhausted");
        None
    }

    async fn attempt(
        &self,
        backend: &dyn GenerativeBackend,
        model: &ModelConfig,
        prompt: &str,
    ) -> Result<String, TriageError> {
        match self.attempt_timeout {
            Some(limit) => tokio::time::timeout(limit, backend.generate(model, prompt))
                .await
                .map_err(|_| TriageError::Timeout(limit))?,
            None => backend.generate(model, prompt).await,
        }
    }
}

#[async_trait]
impl RecommendationSource for AiRecommendationClient {
    async fn draft(&self, query: &SymptomQuery) -> Option<RecommendationDraft> {
        if !self.is_configured() {
            return None;
        }

        let guarded = guard_symptom_input(query.as_str(), MAX_PROMPT_INPUT_CHARS);
        if guarded.was_modified() {
            tracing::info!(modifications = ?guarded.modifications, "Symptom text guarded before prompting");
        }
        if guarded.text.is_empty() {
            return None;
        }

        let prompt = build_triage_prompt(&guarded.text);
        self.recommend(&prompt)
            .await
            .map(|value| RecommendationDraft::from_value(&value))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
