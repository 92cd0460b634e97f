use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Doctor type used when nothing better is known.
pub const DEFAULT_DOCTOR: &str = "General Physician";

/// Reason used when no source supplied one.
pub const DEFAULT_REASON: &str = "A consultation with a healthcare provider is recommended.";

/// Safety disclaimer attached to every result.
pub const DISCLAIMER: &str =
    "This is AI-assisted guidance and not a medical diagnosis. Please consult a licensed doctor.";

/// Upper bound on self-care tips in a result.
pub const MAX_SELF_CARE_TIPS: usize = 4;

/// A non-empty, trimmed free-text symptom description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomQuery(String);

impl SymptomQuery {
    /// Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

/// Triage urgency tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    /// Exact, case-sensitive match against the three wire names.
    pub fn from_exact(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// The only shape a caller ever receives. Built by the response sanitizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub recommended_doctor: String,
    pub urgency_level: UrgencyLevel,
    pub reason: String,
    pub self_care_tips: Vec<String>,
    pub disclaimer: String,
}

impl TriageResult {
    /// Fixed answer for empty or unreadable requests.
    pub fn default_recommendation() -> Self {
        Self {
            recommended_doctor: DEFAULT_DOCTOR.to_string(),
            urgency_level: UrgencyLevel::Low,
            reason: DEFAULT_REASON.to_string(),
            self_care_tips: Vec::new(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// A candidate recommendation before sanitization.
///
/// Every field is optional: generative output is loosely shaped, and the
/// sanitizer decides what survives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationDraft {
    pub recommended_doctor: Option<String>,
    pub urgency_level: Option<String>,
    pub reason: Option<String>,
    /// `None` when the source value was not an array.
    pub self_care_tips: Option<Vec<String>>,
    pub disclaimer: Option<String>,
}

impl RecommendationDraft {
    /// Lenient read of a parsed JSON object. Non-string fields are treated
    /// as absent; non-string tip entries are dropped.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let self_care_tips = value.get("selfCareTips").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        });

        Self {
            recommended_doctor: text("recommendedDoctor"),
            urgency_level: text("urgencyLevel"),
            reason: text("reason"),
            self_care_tips,
            disclaimer: text("disclaimer"),
        }
    }
}

impl From<TriageResult> for RecommendationDraft {
    fn from(result: TriageResult) -> Self {
        Self {
            recommended_doctor: Some(result.recommended_doctor),
            urgency_level: Some(result.urgency_level.as_str().to_string()),
            reason: Some(result.reason),
            self_care_tips: Some(result.self_care_tips),
            disclaimer: Some(result.disclaimer),
        }
    }
}

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageSource {
    /// Generative backend output.
    Ai,
    /// Deterministic rule engine.
    Fallback,
    /// Empty input; no stage ran.
    Default,
}

impl TriageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Fallback => "fallback",
            Self::Default => "default",
        }
    }
}

/// One backend/version pairing, tried in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub model: String,
    pub api_version: String,
}

impl ModelConfig {
    pub fn new(model: &str, api_version: &str) -> Self {
        Self {
            model: model.to_string(),
            api_version: api_version.to_string(),
        }
    }
}

impl std::fmt::Display for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.model, self.api_version)
    }
}
