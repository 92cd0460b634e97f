//! Static term tables for the rule-based triage path.
//!
//! Terms are matched as whole words, case-insensitively. English,
//! Devanagari and romanised Hindi terms sit side by side; a spelling that is
//! not listed here does not match.

use super::types::DEFAULT_DOCTOR;

/// A named set of matching terms.
#[derive(Debug, Clone, Copy)]
pub struct TermSet {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

/// Emergency language. Checked before [`MEDIUM_URGENCY_TERMS`].
pub const HIGH_URGENCY_TERMS: TermSet = TermSet {
    name: "high-urgency",
    terms: &[
        "severe",
        "intense",
        "unbearable",
        "emergency",
        "chest pain",
        "chest pains",
        "difficulty breathing",
        "breathing difficulty",
        "can't breathe",
        "can’t breathe",
        "cannot breathe",
        "unconscious",
        "bleeding",
        "bleeds",
        "heavy bleed",
        "heavy bleeding",
        "trauma",
        "fracture",
        "broken bone",
        "गंभीर",
        "आपातकालीन",
        "gambhir",
        "bahut tez dard",
        "seene mein dard",
        "seene me dard",
        "saans lene mein takleef",
        "saans nahi aa rahi",
        "behosh",
        "khoon beh raha",
    ],
};

/// Persistent or worsening symptoms.
pub const MEDIUM_URGENCY_TERMS: TermSet = TermSet {
    name: "medium-urgency",
    terms: &[
        "moderate",
        "persistent",
        "worsening",
        "fever",
        "fevers",
        "high fever",
        "pain",
        "pains",
        "nausea",
        "vomit",
        "vomiting",
        "dizziness",
        "निरंतर",
        "बुखार",
        "दर्द",
        "उल्टी",
        "lagatar",
        "bukhar",
        "tez bukhar",
        "dard",
        "ulti",
        "chakkar",
        "jee machlana",
    ],
};

pub const CARDIOLOGIST: &str = "Cardiologist";
pub const DERMATOLOGIST: &str = "Dermatologist";
pub const ORTHOPEDIC: &str = "Orthopedic";
pub const NEUROLOGIST: &str = "Neurologist";
pub const GASTROENTEROLOGIST: &str = "Gastroenterologist";
pub const ENT_SPECIALIST: &str = "ENT Specialist";
pub const OPHTHALMOLOGIST: &str = "Ophthalmologist";
pub const PULMONOLOGIST: &str = "Pulmonologist";
pub const PSYCHIATRIST: &str = "Psychiatrist";
pub const PEDIATRICIAN: &str = "Pediatrician";
pub const ALLERGIST: &str = "Allergist";

/// Specialty term sets in priority order; the first hit wins.
pub const SPECIALTY_TERMS: &[TermSet] = &[
    TermSet {
        name: CARDIOLOGIST,
        terms: &[
            "heart",
            "chest",
            "cardiac",
            "palpitation",
            "palpitations",
            "blood pressure",
            "दिल",
            "सीने",
            "हृदय",
            "dil",
            "seene",
            "seena",
            "dhadkan",
        ],
    },
    TermSet {
        name: DERMATOLOGIST,
        terms: &[
            "skin",
            "rash",
            "acne",
            "mole",
            "dermatitis",
            "eczema",
            "itch",
            "itchy",
            "त्वचा",
            "चकत्ते",
            "खुजली",
            "khujli",
            "twacha",
            "daane",
        ],
    },
    TermSet {
        name: ORTHOPEDIC,
        terms: &[
            "bone",
            "joint",
            "muscle",
            "spine",
            "fracture",
            "arthritis",
            "back pain",
            "knee",
            "shoulder",
            "हड्डी",
            "जोड़",
            "मांसपेशी",
            "पीठ",
            "haddi",
            "jodon",
            "kamar dard",
            "ghutna",
            "ghutne",
        ],
    },
    TermSet {
        name: NEUROLOGIST,
        terms: &[
            "headache",
            "migraine",
            "seizure",
            "neurological",
            "brain",
            "memory",
            "dizziness",
            "numbness",
            "सिरदर्द",
            "माइग्रेन",
            "चक्कर",
            "sir dard",
            "sar dard",
            "sirdard",
            "chakkar",
        ],
    },
    TermSet {
        name: GASTROENTEROLOGIST,
        terms: &[
            "stomach",
            "digestion",
            "nausea",
            "vomit",
            "vomiting",
            "diarrhea",
            "constipation",
            "abdomen",
            "bloat",
            "bloating",
            "पेट",
            "पाचन",
            "उल्टी",
            "दस्त",
            "pet dard",
            "pet mein dard",
            "ulti",
            "dast",
            "kabz",
        ],
    },
    TermSet {
        name: ENT_SPECIALIST,
        terms: &[
            "ear",
            "nose",
            "throat",
            "sinus",
            "hearing",
            "voice",
            "tonsil",
            "earache",
            "sore throat",
            "कान",
            "नाक",
            "गला",
            "कान दर्द",
            "kaan",
            "naak",
            "gala",
            "gale",
        ],
    },
    TermSet {
        name: OPHTHALMOLOGIST,
        terms: &[
            "eye",
            "eyes",
            "vision",
            "sight",
            "retina",
            "glaucoma",
            "conjunctivitis",
            "red eye",
            "आंख",
            "दृष्टि",
            "आँख",
            "aankh",
            "aankhon",
            "nazar",
        ],
    },
    TermSet {
        name: PULMONOLOGIST,
        terms: &[
            "cough",
            "cold",
            "flu",
            "respiratory",
            "asthma",
            "breathing",
            "lung",
            "lungs",
            "wheeze",
            "wheezing",
            "खांसी",
            "सांस",
            "जुकाम",
            "khansi",
            "khaansi",
            "saans",
            "zukam",
            "jukam",
        ],
    },
    TermSet {
        name: PSYCHIATRIST,
        terms: &[
            "anxiety",
            "stress",
            "sleep",
            "mood",
            "depressed",
            "depression",
            "mental",
            "स्ट्रेस",
            "नींद",
            "मानसिक",
            "tanav",
            "neend",
            "chinta",
            "udaas",
        ],
    },
    TermSet {
        name: PEDIATRICIAN,
        terms: &[
            "baby",
            "child",
            "kid",
            "pediatric",
            "बच्चा",
            "शिशु",
            "bachcha",
            "baccha",
            "bacche",
        ],
    },
    TermSet {
        name: ALLERGIST,
        terms: &[
            "allergy",
            "sneeze",
            "sneezing",
            "itching",
            "एलर्जी",
            "chheenk",
            "chheenkein",
        ],
    },
];

/// Self-care tips keyed by specialty, used only for low-urgency answers.
pub struct SpecialtyLexicon {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl SpecialtyLexicon {
    /// The built-in tip bank.
    pub const fn builtin() -> Self {
        Self { entries: TIPS_BY_SPECIALTY }
    }

    /// Tips for `specialty`, falling back to the General Physician set.
    pub fn tips_for(&self, specialty: &str) -> &'static [&'static str] {
        self.lookup(specialty)
            .or_else(|| self.lookup(DEFAULT_DOCTOR))
            .unwrap_or(&[])
    }

    fn lookup(&self, specialty: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == specialty)
            .map(|(_, tips)| *tips)
    }
}

const TIPS_BY_SPECIALTY: &[(&str, &[&str])] = &[
    (
        CARDIOLOGIST,
        &[
            "Rest and avoid strenuous activity until you see a doctor",
            "Avoid excess caffeine or stimulants before your visit",
            "Stay hydrated and note when symptoms occur to share with your doctor",
        ],
    ),
    (
        DERMATOLOGIST,
        &[
            "Avoid scratching affected areas to reduce irritation",
            "Use mild, fragrance-free soap and keep the area clean and dry",
            "Wear loose, breathable clothing over affected skin",
        ],
    ),
    (
        ORTHOPEDIC,
        &[
            "Rest the affected area and avoid heavy lifting or repetitive strain",
            "Use ice or a warm compress for 15–20 minutes if it feels comforting",
            "Avoid staying in one position too long; move gently within comfort",
        ],
    ),
    (
        NEUROLOGIST,
        &[
            "Rest in a quiet, dim environment if you have headache or dizziness",
            "Stay hydrated and avoid skipping meals",
            "Limit screen time and bright lights when symptoms are present",
        ],
    ),
    (
        GASTROENTEROLOGIST,
        &[
            "Eat small, light, bland meals (e.g. rice, toast, banana)",
            "Stay hydrated with water; sip slowly if nauseous",
            "Avoid spicy, fatty, or heavy foods until you see a doctor",
        ],
    ),
    (
        ENT_SPECIALIST,
        &[
            "Stay hydrated and rest your voice if your throat is sore",
            "Use a humidifier or breathe steam for comfort",
            "Avoid smoke and very dry or dusty environments",
        ],
    ),
    (
        OPHTHALMOLOGIST,
        &[
            "Rest your eyes and limit screen time when possible",
            "Avoid rubbing your eyes; use a clean, damp cloth if needed",
            "Wear sunglasses or reduce bright light if sensitivity is an issue",
        ],
    ),
    (
        PULMONOLOGIST,
        &[
            "Rest and avoid heavy physical exertion",
            "Stay in well-ventilated spaces and avoid smoke or strong fumes",
            "Stay hydrated and breathe slowly if you feel short of breath",
        ],
    ),
    (
        PSYCHIATRIST,
        &[
            "Stick to a regular sleep schedule as much as possible",
            "Spend some time outdoors or in natural light each day",
            "Stay in touch with people you trust; avoid isolating yourself",
        ],
    ),
    (
        PEDIATRICIAN,
        &[
            "Keep the child comfortable and offer small sips of water if allowed",
            "Note feeding, sleep, and temperature to share with the doctor",
            "Ensure a calm, restful environment and avoid overstimulation",
        ],
    ),
    (
        ALLERGIST,
        &[
            "Avoid known triggers (e.g. pollen, dust) when you can",
            "Keep windows closed when pollen counts are high",
            "Shower or change clothes after being outdoors to reduce exposure",
        ],
    ),
    (
        DEFAULT_DOCTOR,
        &[
            "Stay hydrated and get adequate rest",
            "Eat light, balanced meals and avoid skipping meals",
            "Note when symptoms started and what makes them better or worse for your visit",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_specialty_has_tips() {
        let lexicon = SpecialtyLexicon::builtin();
        for set in SPECIALTY_TERMS {
            let tips = lexicon.tips_for(set.name);
            assert!(!tips.is_empty(), "no tips for {}", set.name);
            assert!(tips.len() <= 3, "too many tips for {}", set.name);
        }
    }

    #[test]
    fn unknown_specialty_gets_general_tips() {
        let lexicon = SpecialtyLexicon::builtin();
        assert_eq!(lexicon.tips_for("Podiatrist"), lexicon.tips_for(DEFAULT_DOCTOR));
        assert!(lexicon.tips_for("Podiatrist")[0].contains("hydrated"));
    }

    #[test]
    fn specialty_order_is_fixed() {
        let names: Vec<_> = SPECIALTY_TERMS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                CARDIOLOGIST,
                DERMATOLOGIST,
                ORTHOPEDIC,
                NEUROLOGIST,
                GASTROENTEROLOGIST,
                ENT_SPECIALIST,
                OPHTHALMOLOGIST,
                PULMONOLOGIST,
                PSYCHIATRIST,
                PEDIATRICIAN,
                ALLERGIST,
            ]
        );
    }

    #[test]
    fn term_sets_are_lowercase_and_trimmed() {
        let all = SPECIALTY_TERMS
            .iter()
            .chain([&HIGH_URGENCY_TERMS, &MEDIUM_URGENCY_TERMS]);
        for set in all {
            for term in set.terms {
                assert_eq!(*term, term.trim(), "untrimmed term in {}", set.name);
                assert_eq!(*term, term.to_lowercase(), "uppercase term in {}", set.name);
            }
        }
    }
}
