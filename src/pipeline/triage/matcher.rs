use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::lexicon::{TermSet, HIGH_URGENCY_TERMS, MEDIUM_URGENCY_TERMS, SPECIALTY_TERMS};
use super::types::{UrgencyLevel, DEFAULT_DOCTOR};
use super::TriageError;

/// A term set compiled into a single whole-word alternation.
struct CompiledSet {
    name: &'static str,
    regex: Regex,
}

impl CompiledSet {
    fn compile(set: &TermSet) -> Result<Self, TriageError> {
        let alternation = set
            .terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
            .map_err(|e| TriageError::Lexicon(format!("{}: {e}", set.name)))?;
        Ok(Self { name: set.name, regex })
    }
}

/// Outcome of rule-based classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub urgency: UrgencyLevel,
    pub specialty: &'static str,
}

/// Classifies symptom text against the urgency and specialty term sets.
///
/// Pure: no state is mutated after construction, so one instance is shared
/// across all requests.
pub struct SymptomMatcher {
    high: CompiledSet,
    medium: CompiledSet,
    specialties: Vec<CompiledSet>,
}

static BUILTIN: LazyLock<Arc<SymptomMatcher>> = LazyLock::new(|| {
    Arc::new(
        SymptomMatcher::from_tables(&HIGH_URGENCY_TERMS, &MEDIUM_URGENCY_TERMS, SPECIALTY_TERMS)
            .expect("built-in lexicon compiles"),
    )
});

impl SymptomMatcher {
    /// Compile a matcher from explicit tables.
    pub fn from_tables(
        high: &TermSet,
        medium: &TermSet,
        specialties: &[TermSet],
    ) -> Result<Self, TriageError> {
        Ok(Self {
            high: CompiledSet::compile(high)?,
            medium: CompiledSet::compile(medium)?,
            specialties: specialties
                .iter()
                .map(CompiledSet::compile)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Shared matcher over the built-in lexicon, compiled once per process.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// High beats Medium; no hit in either is Low.
    pub fn classify_urgency(&self, text: &str) -> UrgencyLevel {
        if self.high.regex.is_match(text) {
            UrgencyLevel::High
        } else if self.medium.regex.is_match(text) {
            UrgencyLevel::Medium
        } else {
            UrgencyLevel::Low
        }
    }

    /// First specialty set with a hit, else General Physician.
    pub fn classify_specialty(&self, text: &str) -> &'static str {
        self.specialties
            .iter()
            .find(|set| set.regex.is_match(text))
            .map(|set| set.name)
            .unwrap_or(DEFAULT_DOCTOR)
    }

    pub fn classify(&self, text: &str) -> Classification {
        let classification = Classification {
            urgency: self.classify_urgency(text),
            specialty: self.classify_specialty(text),
        };
        tracing::debug!(
            urgency = classification.urgency.as_str(),
            specialty = classification.specialty,
            high_set = self.high.name,
            medium_set = self.medium.name,
            "Rule-based classification"
        );
        classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::triage::lexicon::*;

    fn matcher() -> Arc<SymptomMatcher> {
        SymptomMatcher::builtin()
    }

    #[test]
    fn high_urgency_terms() {
        let m = matcher();
        for text in [
            "severe chest pain, can't breathe",
            "I was in an accident, possible fracture",
            "heavy bleeding from a cut",
            "he is unconscious",
            "Unbearable pain in my side",
            "गंभीर सिरदर्द",
        ] {
            assert_eq!(m.classify_urgency(text), UrgencyLevel::High, "{text}");
        }
    }

    #[test]
    fn medium_urgency_terms() {
        let m = matcher();
        for text in [
            "mild headache and dizziness",
            "fever since yesterday",
            "persistent cough",
            "nausea after meals",
            "मुझे बुखार है",
            "पेट में दर्द",
        ] {
            assert_eq!(m.classify_urgency(text), UrgencyLevel::Medium, "{text}");
        }
    }

    #[test]
    fn low_urgency_when_nothing_matches() {
        let m = matcher();
        assert_eq!(m.classify_urgency("slightly itchy skin"), UrgencyLevel::Low);
        assert_eq!(m.classify_urgency("asdf qwerty"), UrgencyLevel::Low);
    }

    #[test]
    fn high_takes_precedence_over_medium() {
        let m = matcher();
        assert_eq!(
            m.classify_urgency("persistent fever and severe weakness"),
            UrgencyLevel::High
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = matcher();
        assert_eq!(m.classify_urgency("SEVERE cramps"), UrgencyLevel::High);
        assert_eq!(m.classify_specialty("My SKIN is dry"), DERMATOLOGIST);
    }

    #[test]
    fn whole_words_only() {
        let m = matcher();
        // "painting" must not match "pain"; "earth" must not match "ear".
        assert_eq!(m.classify_urgency("I enjoy painting"), UrgencyLevel::Low);
        assert_eq!(m.classify_specialty("earth and heartburn"), DEFAULT_DOCTOR);
        // Unlisted inflections do not match either.
        assert_eq!(m.classify_urgency("feverish"), UrgencyLevel::Low);
    }

    #[test]
    fn specialty_scenarios() {
        let m = matcher();
        let cases = [
            ("severe chest pain, can't breathe", CARDIOLOGIST),
            ("red itchy rash on arm", DERMATOLOGIST),
            ("knee hurts when climbing stairs", ORTHOPEDIC),
            ("mild headache and dizziness", NEUROLOGIST),
            ("stomach cramps and diarrhea", GASTROENTEROLOGIST),
            ("sore throat for two days", ENT_SPECIALIST),
            ("my eyes are watering", OPHTHALMOLOGIST),
            ("dry cough at night", PULMONOLOGIST),
            ("feeling a lot of anxiety", PSYCHIATRIST),
            ("my baby is fussy", PEDIATRICIAN),
            ("constant sneezing in spring", ALLERGIST),
        ];
        for (text, expected) in cases {
            assert_eq!(m.classify_specialty(text), expected, "{text}");
        }
    }

    #[test]
    fn specialty_first_match_wins() {
        let m = matcher();
        // Cardiac set precedes every other set.
        assert_eq!(m.classify_specialty("chest rash and cough"), CARDIOLOGIST);
        // "itch" is dermatological even though allergy also appears.
        assert_eq!(m.classify_specialty("allergy makes my skin itch"), DERMATOLOGIST);
    }

    #[test]
    fn hindi_specialty_terms() {
        let m = matcher();
        assert_eq!(m.classify_specialty("दिल की धड़कन तेज"), CARDIOLOGIST);
        assert_eq!(m.classify_specialty("त्वचा पर खुजली"), DERMATOLOGIST);
        assert_eq!(m.classify_specialty("बहुत खांसी"), PULMONOLOGIST);
        assert_eq!(m.classify_specialty("रात को नींद नहीं आती"), PSYCHIATRIST);
    }

    #[test]
    fn romanised_hindi_terms() {
        let m = matcher();
        let cases = [
            ("mujhe tez bukhar hai", UrgencyLevel::Medium, DEFAULT_DOCTOR),
            ("sir mein bahut dard hai", UrgencyLevel::Medium, DEFAULT_DOCTOR),
            ("saans lene mein takleef", UrgencyLevel::High, PULMONOLOGIST),
            ("pet dard aur ulti", UrgencyLevel::Medium, GASTROENTEROLOGIST),
            ("seene mein dard ho raha hai", UrgencyLevel::High, CARDIOLOGIST),
            ("haath par khujli", UrgencyLevel::Low, DERMATOLOGIST),
            ("do din se khansi", UrgencyLevel::Low, PULMONOLOGIST),
            ("Sir Dard aur chakkar", UrgencyLevel::Medium, NEUROLOGIST),
        ];
        for (text, urgency, specialty) in cases {
            let c = m.classify(text);
            assert_eq!(c.urgency, urgency, "{text}");
            assert_eq!(c.specialty, specialty, "{text}");
        }
    }

    #[test]
    fn plural_and_reordered_forms_keep_urgency() {
        let m = matcher();
        assert_eq!(m.classify_urgency("I have chest pains"), UrgencyLevel::High);
        assert_eq!(m.classify_specialty("I have chest pains"), CARDIOLOGIST);
        assert_eq!(m.classify_urgency("breathing difficulty since morning"), UrgencyLevel::High);
        assert_eq!(m.classify_urgency("the cut still bleeds"), UrgencyLevel::High);
        assert_eq!(m.classify_urgency("fevers on and off"), UrgencyLevel::Medium);
        assert_eq!(m.classify_urgency("body pains all week"), UrgencyLevel::Medium);
    }

    #[test]
    fn unmatched_text_defaults_to_general_physician() {
        let m = matcher();
        assert_eq!(m.classify_specialty("I just feel off today"), DEFAULT_DOCTOR);
    }

    #[test]
    fn classification_is_deterministic() {
        let m = matcher();
        let text = "worsening back pain after lifting";
        let first = m.classify(text);
        for _ in 0..10 {
            assert_eq!(m.classify(text), first);
        }
        assert_eq!(first.urgency, UrgencyLevel::Medium);
        assert_eq!(first.specialty, ORTHOPEDIC);
    }

    #[test]
    fn custom_tables_compile() {
        let high = TermSet { name: "h", terms: &["collapse"] };
        let medium = TermSet { name: "m", terms: &["ache"] };
        let specialties = [TermSet { name: "Podiatrist", terms: &["foot", "toe"] }];
        let m = SymptomMatcher::from_tables(&high, &medium, &specialties).unwrap();
        assert_eq!(m.classify_urgency("toe ache"), UrgencyLevel::Medium);
        assert_eq!(m.classify_specialty("toe ache"), "Podiatrist");
        assert_eq!(m.classify_specialty("knee"), DEFAULT_DOCTOR);
    }

    #[test]
    fn builtin_is_shared() {
        assert!(Arc::ptr_eq(&SymptomMatcher::builtin(), &SymptomMatcher::builtin()));
    }
}
