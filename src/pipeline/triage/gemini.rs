//! Google Gemini `generateContent` backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::Deserialize;

use super::client::GenerativeBackend;
use super::types::ModelConfig;
use super::TriageError;

const TEMPERATURE: f32 = 0.35;
const MAX_OUTPUT_TOKENS: u32 = 600;
const ERROR_BODY_LOG_LIMIT: usize = 200;

const SAFETY_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

pub struct GeminiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

// -- Response types --

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl GeminiBackend {
    /// `timeout` bounds each HTTP call; `None` keeps the reqwest default.
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, TriageError> {
        if api_key.trim().is_empty() {
            return Err(TriageError::HttpClient("Gemini API key is required".into()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TriageError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    pub fn endpoint(&self, model: &ModelConfig) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, model.api_version, model.model
        )
    }

    pub fn build_request_body(prompt: &str) -> serde_json::Value {
        let safety_settings: Vec<_> = SAFETY_CATEGORIES
            .iter()
            .map(|category| {
                serde_json::json!({
                    "category": category,
                    "threshold": "BLOCK_MEDIUM_AND_ABOVE",
                })
            })
            .collect();

        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            },
            "safetySettings": safety_settings,
        })
    }

    /// Text of the first part of the first candidate.
    pub fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.clone())
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, model: &ModelConfig, prompt: &str) -> Result<String, TriageError> {
        let url = self.endpoint(model);
        let body = Self::build_request_body(prompt);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(
                "x-goog-api-key",
                HeaderValue::from_str(&self.api_key)
                    .map_err(|e| TriageError::HttpClient(format!("Invalid API key header: {e}")))?,
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TriageError::Transport(format!("{model}: timed out"))
                } else {
                    TriageError::Transport(format!("{model}: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let truncated: String = error_body.chars().take(ERROR_BODY_LOG_LIMIT).collect();
            return Err(TriageError::BackendStatus {
                status: status.as_u16(),
                body: truncated,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TriageError::ResponseParsing(e.to_string()))?;

        Self::extract_text(&parsed).ok_or(TriageError::EmptyResponse)
    }
}
