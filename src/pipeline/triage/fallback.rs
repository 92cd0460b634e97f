//! Deterministic, network-free recommendation engine.
//!
//! Always produces a complete result; this is what callers get whenever
//! the generative path is missing, failing, or returns something unusable.

use std::sync::Arc;

use super::lexicon::SpecialtyLexicon;
use super::matcher::SymptomMatcher;
use super::types::{SymptomQuery, TriageResult, UrgencyLevel, DISCLAIMER};

/// Longest excerpt of the user's text quoted back in the reason.
const EXCERPT_MAX_CHARS: usize = 60;
const ELLIPSIS: char = '…';

pub struct FallbackEngine {
    matcher: Arc<SymptomMatcher>,
    tips: SpecialtyLexicon,
}

impl FallbackEngine {
    pub fn new(matcher: Arc<SymptomMatcher>, tips: SpecialtyLexicon) -> Self {
        Self { matcher, tips }
    }

    /// Engine over the built-in lexicon.
    pub fn builtin() -> Self {
        Self::new(SymptomMatcher::builtin(), SpecialtyLexicon::builtin())
    }

    pub fn recommend(&self, query: &SymptomQuery) -> TriageResult {
        let classification = self.matcher.classify(query.as_str());
        let doctor = classification.specialty;

        let self_care_tips = if classification.urgency == UrgencyLevel::Low {
            self.tips
                .tips_for(doctor)
                .iter()
                .map(|t| t.to_string())
                .collect()
        } else {
            Vec::new()
        };

        TriageResult {
            recommended_doctor: doctor.to_string(),
            urgency_level: classification.urgency,
            reason: format!(
                "Based on what you described (\"{}\"), a consultation with a {} is recommended.",
                excerpt(query.as_str()),
                doctor
            ),
            self_care_tips,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

impl Default for FallbackEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Up to 60 characters of `text`; longer input keeps 57 and gains an ellipsis.
pub fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(EXCERPT_MAX_CHARS - 3).collect();
    short.push(ELLIPSIS);
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::triage::lexicon::{CARDIOLOGIST, DERMATOLOGIST, NEUROLOGIST};
    use crate::pipeline::triage::types::DEFAULT_DOCTOR;

    fn recommend(text: &str) -> TriageResult {
        FallbackEngine::builtin().recommend(&SymptomQuery::new(text).unwrap())
    }

    #[test]
    fn chest_pain_scenario() {
        let result = recommend("severe chest pain, can't breathe");
        assert_eq!(result.urgency_level, UrgencyLevel::High);
        assert_eq!(result.recommended_doctor, CARDIOLOGIST);
        assert!(result.self_care_tips.is_empty());
    }

    #[test]
    fn headache_dizziness_scenario() {
        let result = recommend("mild headache and dizziness");
        assert_eq!(result.urgency_level, UrgencyLevel::Medium);
        assert_eq!(result.recommended_doctor, NEUROLOGIST);
        assert!(result.self_care_tips.is_empty());
    }

    #[test]
    fn low_urgency_gets_specialty_tips() {
        let result = recommend("itchy rash on my arm");
        assert_eq!(result.urgency_level, UrgencyLevel::Low);
        assert_eq!(result.recommended_doctor, DERMATOLOGIST);
        assert_eq!(result.self_care_tips.len(), 3);
        assert!(result.self_care_tips[0].contains("scratching"));
    }

    #[test]
    fn hinglish_and_plural_inputs_are_not_low() {
        for text in [
            "mujhe tez bukhar hai",
            "sir mein bahut dard hai",
            "saans lene mein takleef",
            "pet dard aur ulti",
            "I have chest pains",
        ] {
            let result = recommend(text);
            assert_ne!(result.urgency_level, UrgencyLevel::Low, "{text}");
            assert!(result.self_care_tips.is_empty(), "{text}");
        }
    }

    #[test]
    fn nonsense_defaults_to_general_physician_low() {
        let result = recommend("zzz qqq");
        assert_eq!(result.urgency_level, UrgencyLevel::Low);
        assert_eq!(result.recommended_doctor, DEFAULT_DOCTOR);
        assert_eq!(result.self_care_tips.len(), 3);
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn reason_quotes_input_and_doctor() {
        let result = recommend("itchy rash on my arm");
        assert_eq!(
            result.reason,
            "Based on what you described (\"itchy rash on my arm\"), \
             a consultation with a Dermatologist is recommended."
        );
    }

    #[test]
    fn reason_truncates_long_input() {
        let long = "a".repeat(100);
        let result = recommend(&long);
        let expected = format!("(\"{}…\")", "a".repeat(57));
        assert!(result.reason.contains(&expected), "{}", result.reason);
    }

    #[test]
    fn excerpt_boundaries() {
        assert_eq!(excerpt(""), "");
        assert_eq!(excerpt(&"x".repeat(60)), "x".repeat(60));
        let over = excerpt(&"x".repeat(61));
        assert_eq!(over.chars().count(), 58);
        assert!(over.ends_with('…'));
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let hindi = "सिरदर्द ".repeat(10);
        let short = excerpt(&hindi);
        assert!(short.ends_with('…'));
        assert_eq!(short.chars().count(), 58);
    }

    #[test]
    fn same_input_same_output() {
        let engine = FallbackEngine::builtin();
        let query = SymptomQuery::new("persistent cough and fever").unwrap();
        let first = engine.recommend(&query);
        assert_eq!(engine.recommend(&query), first);
    }
}
