//! Shared state for the HTTP layer.

use std::sync::Arc;

use crate::config::TriageConfig;
use crate::pipeline::triage::TriagePipeline;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub pipeline: Arc<TriagePipeline>,
    /// Whether a generative backend credential is present.
    pub ai_configured: bool,
    pub max_body_bytes: usize,
    pub cors_origin: Option<String>,
}

impl ApiContext {
    pub fn new(pipeline: Arc<TriagePipeline>, config: &TriageConfig) -> Self {
        Self {
            pipeline,
            ai_configured: config.ai_enabled(),
            max_body_bytes: config.max_body_bytes,
            cors_origin: config.cors_origin.clone(),
        }
    }

    pub fn from_config(config: &TriageConfig) -> Self {
        Self::new(Arc::new(TriagePipeline::from_config(config)), config)
    }
}
