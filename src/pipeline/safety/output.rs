//! Response sanitizer: the last stage for every recommendation.
//!
//! Whatever produced the draft (generative backend or rule engine), callers
//! only ever see what comes out of [`sanitize_recommendation`].

use crate::pipeline::triage::types::{
    RecommendationDraft, TriageResult, UrgencyLevel, DEFAULT_DOCTOR, DEFAULT_REASON, DISCLAIMER,
    MAX_SELF_CARE_TIPS,
};

/// Enforce the output invariants on a draft.
///
/// - urgency is exactly `Low`/`Medium`/`High`, anything else becomes `Low`
/// - tips survive only at `Low`, capped at four
/// - blank doctor/reason fall back to fixed defaults
/// - the disclaimer is always the fixed safety text
pub fn sanitize_recommendation(draft: &RecommendationDraft) -> TriageResult {
    let urgency_level = draft
        .urgency_level
        .as_deref()
        .and_then(UrgencyLevel::from_exact)
        .unwrap_or(UrgencyLevel::Low);

    let self_care_tips = match (urgency_level, &draft.self_care_tips) {
        (UrgencyLevel::Low, Some(tips)) => tips.iter().take(MAX_SELF_CARE_TIPS).cloned().collect(),
        _ => Vec::new(),
    };

    TriageResult {
        recommended_doctor: non_empty_or(&draft.recommended_doctor, DEFAULT_DOCTOR),
        urgency_level,
        reason: non_empty_or(&draft.reason, DEFAULT_REASON),
        self_care_tips,
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn non_empty_or(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: serde_json::Value) -> RecommendationDraft {
        RecommendationDraft::from_value(&value)
    }

    fn assert_invariants(result: &TriageResult) {
        if result.urgency_level != UrgencyLevel::Low {
            assert!(result.self_care_tips.is_empty(), "{result:?}");
        }
        assert!(result.self_care_tips.len() <= MAX_SELF_CARE_TIPS);
        assert!(!result.recommended_doctor.is_empty());
        assert!(!result.reason.is_empty());
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn unknown_urgency_coerces_to_low() {
        for urgency in [json!("Critical"), json!("high"), json!(""), json!(3), json!(null)] {
            let result = sanitize_recommendation(&draft(json!({ "urgencyLevel": urgency })));
            assert_eq!(result.urgency_level, UrgencyLevel::Low);
        }
    }

    #[test]
    fn tips_dropped_unless_low() {
        let tips = json!(["Rest", "Hydrate"]);
        for urgency in ["Medium", "High"] {
            let result = sanitize_recommendation(&draft(json!({
                "urgencyLevel": urgency,
                "selfCareTips": tips,
            })));
            assert!(result.self_care_tips.is_empty(), "{urgency}");
        }
        let result = sanitize_recommendation(&draft(json!({
            "urgencyLevel": "Low",
            "selfCareTips": tips,
        })));
        assert_eq!(result.self_care_tips, vec!["Rest", "Hydrate"]);
    }

    #[test]
    fn tips_capped_at_four_in_order() {
        let result = sanitize_recommendation(&draft(json!({
            "urgencyLevel": "Low",
            "selfCareTips": ["a", "b", "c", "d", "e", "f"],
        })));
        assert_eq!(result.self_care_tips, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn non_array_tips_become_empty() {
        let result = sanitize_recommendation(&draft(json!({
            "urgencyLevel": "Low",
            "selfCareTips": "Rest a lot",
        })));
        assert!(result.self_care_tips.is_empty());
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let result = sanitize_recommendation(&RecommendationDraft::default());
        assert_eq!(result, TriageResult::default_recommendation());
    }

    #[test]
    fn blank_doctor_and_reason_replaced() {
        let result = sanitize_recommendation(&draft(json!({
            "recommendedDoctor": "",
            "reason": "",
            "urgencyLevel": "Medium",
        })));
        assert_eq!(result.recommended_doctor, DEFAULT_DOCTOR);
        assert_eq!(result.reason, DEFAULT_REASON);
        assert_eq!(result.urgency_level, UrgencyLevel::Medium);
    }

    #[test]
    fn upstream_disclaimer_is_never_trusted() {
        let result = sanitize_recommendation(&draft(json!({
            "urgencyLevel": "Low",
            "disclaimer": "This is a diagnosis.",
        })));
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn free_text_doctor_passes_through() {
        let result = sanitize_recommendation(&draft(json!({
            "recommendedDoctor": "Endocrinologist",
            "urgencyLevel": "Low",
        })));
        assert_eq!(result.recommended_doctor, "Endocrinologist");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            json!({}),
            json!({"urgencyLevel": "High", "selfCareTips": ["x"]}),
            json!({"urgencyLevel": "Low", "selfCareTips": ["1", "2", "3", "4", "5"]}),
            json!({"urgencyLevel": "bogus", "recommendedDoctor": "Cardiologist", "reason": "r"}),
            json!({"urgencyLevel": "Medium", "selfCareTips": 12, "disclaimer": ""}),
        ];
        for input in inputs {
            let once = sanitize_recommendation(&draft(input.clone()));
            let twice = sanitize_recommendation(&once.clone().into());
            assert_eq!(once, twice, "{input}");

            // Same through the wire format.
            let wire = serde_json::to_value(&once).unwrap();
            assert_eq!(sanitize_recommendation(&draft(wire)), once);
        }
    }

    #[test]
    fn invariants_hold_for_assorted_drafts() {
        let urgencies = [json!("Low"), json!("Medium"), json!("High"), json!("x"), json!(null)];
        let tip_shapes = [json!(null), json!([]), json!(["a"]), json!(["a", "b", "c", "d", "e"])];
        for urgency in &urgencies {
            for tips in &tip_shapes {
                let result = sanitize_recommendation(&draft(json!({
                    "urgencyLevel": urgency,
                    "selfCareTips": tips,
                })));
                assert_invariants(&result);
            }
        }
    }
}
