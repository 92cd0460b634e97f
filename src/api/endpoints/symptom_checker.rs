//! Symptom checker endpoint.
//!
//! `POST /api/symptom-checker` with `{ "symptoms": "..." }`. Every readable
//! request gets a `200` with a sanitized recommendation; malformed bodies are
//! treated as empty input.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::triage::TriageResult;

pub async fn check(
    State(ctx): State<ApiContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TriageResult>, ApiError> {
    let body = match body {
        Ok(bytes) => bytes,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(limit = ctx.max_body_bytes, "Symptom checker body over limit");
            return Err(ApiError::PayloadTooLarge);
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable symptom checker body");
            Bytes::new()
        }
    };

    let symptoms = symptoms_from_body(&body);
    let result = ctx.pipeline.triage(&symptoms).await;
    Ok(Json(result))
}

/// Pull `symptoms` out of the body. Anything other than a JSON object with
/// a string `symptoms` field yields an empty string.
pub fn symptoms_from_body(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("symptoms").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_default()
}
