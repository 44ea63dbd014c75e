//! Current-status extraction.

use std::sync::LazyLock;

use super::rules::{first_match, rule, Capture, PatternRule};
use crate::NOT_SPECIFIED;

static STATUS_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            "still_experiencing",
            r"(?i)still\s+(?:experiencing|having|feeling)\s+[^.]+",
            Capture::Whole,
        ),
        rule("occasional", r"(?i)occasional\s+[^.]+", Capture::Whole),
        rule("not_constant", r"(?i)not\s+constant[^.]+", Capture::Whole),
        rule("doing_better", r"(?i)doing\s+better[^.]+", Capture::Whole),
        rule("feeling_now", r"(?i)feeling\s+[^.]+now", Capture::Whole),
    ]
});

/// Patient phrasings tried when no status phrase matched.
static PATIENT_PHRASE_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule("i_still_have", r"(?i)I\s+(?:still|get|have)\s+[^.]+", Capture::Whole),
        rule("its_not", r"(?i)it['’]?s\s+(?:not|nothing)\s+[^.]+", Capture::Whole),
    ]
});

/// Extract what the patient reports about their condition now.
pub fn extract_current_status(text: &str) -> String {
    first_match(&STATUS_RULES, text)
        .or_else(|| first_match(&PATIENT_PHRASE_RULES, text))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}
