//! Symptom triage: free text in, bounded recommendation out.
//!
//! classify → prompt → generate (ordered models) → extract → fallback → sanitize.

pub mod types;
pub mod lexicon;
pub mod matcher;
pub mod fallback;
pub mod prompt;
pub mod extract;
pub mod gemini;
pub mod client;
pub mod orchestrator;

pub use types::*;
pub use matcher::{Classification, SymptomMatcher};
pub use fallback::FallbackEngine;
pub use client::{AiRecommendationClient, GenerativeBackend};
pub use gemini::GeminiBackend;
pub use orchestrator::{RecommendationSource, TriagePipeline};

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Generative API unreachable: {0}")]
    Transport(String),

    #[error("Generative API returned error (status {status}): {body}")]
    BackendStatus { status: u16, body: String },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Lexicon compilation failed: {0}")]
    Lexicon(String),
}
