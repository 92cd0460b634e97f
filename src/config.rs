use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

use crate::pipeline::triage::types::ModelConfig;

/// Application-level constants
pub const APP_NAME: &str = "SehatLink";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Generative models tried in order, most capable first.
pub const DEFAULT_GEMINI_MODELS: &[(&str, &str)] = &[
    ("gemini-2.5-flash", "v1beta"),
    ("gemini-2.0-flash", "v1beta"),
    ("gemini-1.5-pro", "v1beta"),
    ("gemini-pro", "v1"),
];

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "sehatlink_lib=info,sehatlink=info,tower_http=warn"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid model entry {0:?} (expected model@version)")]
    InvalidModel(String),
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Gemini credential. `None` disables the AI path entirely.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub models: Vec<ModelConfig>,
    /// Per-attempt timeout. `None` leaves the transport default in place.
    pub ai_timeout: Option<Duration>,
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    /// Allowed CORS origin; `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            models: default_models(),
            ai_timeout: Some(Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS)),
            bind_addr: DEFAULT_BIND_ADDR,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors_origin: None,
        }
    }
}

impl TriageConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Some(url) = non_blank(lookup("SEHATLINK_GEMINI_BASE_URL")) {
            config.gemini_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(list) = non_blank(lookup("SEHATLINK_GEMINI_MODELS")) {
            config.models = parse_model_list(&list)?;
        }

        if let Some(raw) = non_blank(lookup("SEHATLINK_AI_TIMEOUT_SECS")) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SEHATLINK_AI_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            config.ai_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(raw) = non_blank(lookup("SEHATLINK_BIND_ADDR")) {
            config.bind_addr = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SEHATLINK_BIND_ADDR",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = non_blank(lookup("SEHATLINK_MAX_BODY_BYTES")) {
            config.max_body_bytes = raw
                .trim()
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "SEHATLINK_MAX_BODY_BYTES",
                    value: raw.clone(),
                })?;
        }

        config.cors_origin = non_blank(lookup("SEHATLINK_CORS_ORIGIN"))
            .map(|o| o.trim().to_string())
            .filter(|o| o != "*");

        Ok(config)
    }

    /// Whether the AI path can be attempted at all.
    pub fn ai_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_models() -> Vec<ModelConfig> {
    DEFAULT_GEMINI_MODELS
        .iter()
        .map(|(model, version)| ModelConfig::new(model, version))
        .collect()
}

/// Parse `model@version,model@version,...`.
pub fn parse_model_list(raw: &str) -> Result<Vec<ModelConfig>, ConfigError> {
    let mut models = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (model, version) = entry
            .split_once('@')
            .ok_or_else(|| ConfigError::InvalidModel(entry.to_string()))?;
        if model.trim().is_empty() || version.trim().is_empty() {
            return Err(ConfigError::InvalidModel(entry.to_string()));
        }
        models.push(ModelConfig::new(model.trim(), version.trim()));
    }
    if models.is_empty() {
        return Err(ConfigError::InvalidModel(raw.to_string()));
    }
    Ok(models)
}
