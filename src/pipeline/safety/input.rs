use std::sync::LazyLock;

use regex::Regex;

/// Maximum symptom text length, in characters, forwarded to the generative backend.
pub const MAX_PROMPT_INPUT_CHARS: usize = 2_000;

/// Result of guarding symptom text before prompt construction.
#[derive(Debug, Clone)]
pub struct GuardedInput {
    /// The cleaned text.
    pub text: String,
    /// What was changed (for audit, no patient data).
    pub modifications: Vec<InputModification>,
}

impl GuardedInput {
    pub fn was_modified(&self) -> bool {
        !self.modifications.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModification {
    InvisibleUnicodeRemoved,
    ControlCharacterRemoved,
    InjectionPatternRemoved,
    ExcessiveLengthTruncated,
}

/// Clean symptom text before it is embedded in a prompt.
///
/// The rule-based path never sees this output; it classifies the user's own words.
pub fn guard_symptom_input(raw: &str, max_chars: usize) -> GuardedInput {
    let mut text = raw.to_string();
    let mut modifications = Vec::new();

    let cleaned = remove_invisible_unicode(&text);
    if cleaned != text {
        modifications.push(InputModification::InvisibleUnicodeRemoved);
        text = cleaned;
    }

    let cleaned = remove_control_characters(&text);
    if cleaned != text {
        modifications.push(InputModification::ControlCharacterRemoved);
        text = cleaned;
    }

    let cleaned = remove_injection_patterns(&text);
    if cleaned != text {
        modifications.push(InputModification::InjectionPatternRemoved);
        text = cleaned;
    }

    if text.chars().count() > max_chars {
        text = truncate_at_word_boundary(&text, max_chars);
        modifications.push(InputModification::ExcessiveLengthTruncated);
    }

    GuardedInput {
        text: text.trim().to_string(),
        modifications,
    }
}

fn remove_invisible_unicode(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{200B}'..='\u{200F}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{2069}'
                | '\u{FEFF}'
                | '\u{00AD}'
                | '\u{180E}'
            )
        })
        .collect()
}

fn remove_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

fn remove_injection_patterns(text: &str) -> String {
    static INJECTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
        [
            r"(?i)ignore\s+(?:previous|above|all\s+prior|the\s+above|all)\s+(?:instructions?|rules?|prompts?)",
            r"(?i)forget\s+(?:everything|all|your)\s+(?:previous|prior)?",
            r"(?i)new\s+instructions?:",
            r"(?i)you\s+are\s+now\s+(?:a|an)\s+",
            r"(?i)system\s*:",
            r"(?i)assistant\s*:",
            r"<<SYS>>",
            r"\[INST\]",
            r"<\|im_start\|>",
            r"<\|im_end\|>",
            r"(?i)</?SYMPTOMS>",
            r"(?i)act\s+as\s+(?:a|an|my)\s+(?:doctor|physician|pharmacist)",
            r"(?i)(?:prescribe|recommend)\s+(?:me\s+)?(?:a\s+)?(?:medicine|medication|drug)s?",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid injection regex"))
        .collect()
    });

    let mut result = text.to_string();
    for pattern in INJECTION_PATTERNS.iter() {
        result = pattern.replace_all(&result, "[FILTERED]").into_owned();
    }
    result
}

fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    match truncated.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => truncated[..pos].to_string(),
        _ => truncated,
    }
}
