use super::types::DISCLAIMER;

pub const TRIAGE_INSTRUCTIONS: &str = r#"You are a healthcare assistant. You help people choose which type of doctor to see and how soon. You are NOT a doctor.

ABSOLUTE RULES — NO EXCEPTIONS:
1. NEVER provide a medical diagnosis.
2. NEVER name a specific disease or medical condition.
3. NEVER suggest medicines, remedies, or treatments.
4. NEVER give medical advice or claim that anything will cure or relieve symptoms.
5. Use calm, non-alarming language.
6. Only recommend a doctor type and an urgency level.

GROUNDING:
- Base recommendedDoctor and reason ONLY on the words inside <SYMPTOMS>.
- Different symptoms MUST produce different answers. Do not give a generic answer.
- The symptoms may be written in English, Hindi (Devanagari), or Hinglish. Always answer in English."#;

const DOCTOR_EXAMPLES: &str = "\"General Physician\", \"Cardiologist\", \"Dermatologist\", \
\"Orthopedic\", \"Neurologist\", \"Gastroenterologist\", \"ENT Specialist\", \
\"Ophthalmologist\", \"Pulmonologist\", \"Psychiatrist\", \"Pediatrician\", \"Allergist\"";

/// Build the single instruction block sent to the generative backend.
///
/// `symptoms` is expected to be trimmed and already passed through the input guard.
pub fn build_triage_prompt(symptoms: &str) -> String {
    let mut prompt = String::with_capacity(TRIAGE_INSTRUCTIONS.len() + symptoms.len() + 2048);

    prompt.push_str(TRIAGE_INSTRUCTIONS);
    prompt.push_str("\n\n<SYMPTOMS>\n");
    prompt.push_str(symptoms);
    prompt.push_str("\n</SYMPTOMS>\n\n");

    prompt.push_str("Based ONLY on the symptoms above, decide:\n");
    prompt.push_str(&format!(
        "1. recommendedDoctor: the most relevant doctor type (e.g. {DOCTOR_EXAMPLES}). \
         Match it to the body part or complaint the user actually wrote.\n"
    ));
    prompt.push_str(
        "2. urgencyLevel: \"Low\", \"Medium\", or \"High\". \"High\" for emergency-like language \
         (severe pain, can't breathe, heavy bleeding). \"Medium\" for persistent or worsening \
         symptoms. \"Low\" only for vague or mild symptoms.\n",
    );
    prompt.push_str(
        "3. reason: 1-2 sentences that mention the user's own symptoms and why that doctor type \
         fits. Do not write \"a consultation is recommended\" without referring to what they wrote.\n",
    );
    prompt.push_str(
        "4. selfCareTips: only when urgencyLevel is \"Low\", 3-4 short, one-sentence general \
         wellness tips relevant to the symptoms (rest, hydration, comfort, avoiding obvious \
         triggers). No diagnosis, no medicines, no treatments. Otherwise [].\n\n",
    );

    prompt.push_str("Respond ONLY with valid JSON. No extra text, no markdown, no code fences:\n");
    prompt.push_str("{\n");
    prompt.push_str("  \"recommendedDoctor\": \"Exact doctor type\",\n");
    prompt.push_str("  \"urgencyLevel\": \"Low\" | \"Medium\" | \"High\",\n");
    prompt.push_str("  \"reason\": \"1-2 sentences referring to the symptoms\",\n");
    prompt.push_str("  \"selfCareTips\": [\"tip 1\", \"tip 2\", \"tip 3\"] or [],\n");
    prompt.push_str(&format!("  \"disclaimer\": \"{DISCLAIMER}\"\n"));
    prompt.push('}');

    prompt
}
