//! Pull a JSON object out of loosely formatted model output.

use serde_json::Value;

/// Extract the recommendation object from raw model text.
///
/// 1. Strip a surrounding code fence (```` ``` ```` or ```` ```json ````).
/// 2. Parse the first brace-balanced `{...}` span.
/// 3. Otherwise parse the whole trimmed text.
pub fn extract_json_from_text(text: &str) -> Option<Value> {
    let stripped = strip_code_fence(text.trim());
    if stripped.is_empty() {
        return None;
    }

    if let Some(span) = first_balanced_object(stripped) {
        if let Ok(value) = serde_json::from_str::<Value>(span) {
            return Some(value);
        }
    }

    serde_json::from_str::<Value>(stripped).ok()
}

/// Accept only objects that carry a truthy `recommendedDoctor` or `urgencyLevel`.
pub fn is_acceptable(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.get("recommendedDoctor").is_some_and(is_truthy)
                || map.get("urgencyLevel").is_some_and(is_truthy)
        }
        _ => false,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    let rest = rest.strip_prefix('\n').unwrap_or(rest);

    let rest = match rest.strip_suffix("```") {
        Some(inner) => inner.strip_suffix('\n').unwrap_or(inner),
        None => rest,
    };

    rest.trim()
}

/// Byte span of the first `{` through its matching `}` by depth counting.
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth: usize = 0;

    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}
