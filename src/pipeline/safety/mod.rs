//! Guards on both sides of the generative call: symptom text going in,
//! recommendations coming out.

pub mod input;
pub mod output;

pub use input::{guard_symptom_input, GuardedInput, InputModification, MAX_PROMPT_INPUT_CHARS};
pub use output::sanitize_recommendation;
