//! Patient name extraction.
//!
//! A weak heuristic: the bare two-capitalised-words rule can pick up a
//! physician or a place name when no honorific is present.

use std::sync::LazyLock;

use super::rules::{first_match, rule, Capture, PatternRule};
use crate::UNKNOWN_PATIENT;

// Case-sensitive: capitalisation is the only signal.
static NAME_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            "honorific",
            r"(?:Ms\.|Mr\.|Mrs\.|Dr\.)\s+([A-Z][a-z]+)",
            Capture::Group(1),
        ),
        rule("patient_label", r"Patient[:\s]+([A-Z][a-z]+)", Capture::Group(1)),
        rule("full_name", r"([A-Z][a-z]+\s+[A-Z][a-z]+)", Capture::Group(1)),
    ]
});

/// Extract the patient's name, or `"Unknown"`.
pub fn extract_patient_name(text: &str) -> String {
    first_match(&NAME_RULES, text).unwrap_or_else(|| UNKNOWN_PATIENT.to_string())
}
