//! Plan section: treatment and follow-up.

use std::sync::LazyLock;

use crate::extract::rules::{all_matches, rule, Capture, PatternRule};
use crate::models::{MedicalSummary, Plan};

pub const CONTINUE_MANAGEMENT: &str = "Continue current management";
pub const FOLLOW_UP_AFTER_RECOVERY: &str =
    "Patient to return if symptoms worsen or persist beyond expected recovery period.";
pub const FOLLOW_UP_AS_NEEDED: &str =
    "Patient to return for follow-up as needed or if symptoms worsen.";

static FOLLOW_UP_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule("follow_up", r"(?i)follow[^.]*up[^.]+", Capture::Whole),
        rule("return_if", r"(?i)return\s+if[^.]+", Capture::Whole),
        rule("come_back", r"(?i)come\s+back[^.]+", Capture::Whole),
        rule("schedule", r"(?i)schedule[^.]+", Capture::Whole),
    ]
});

pub(crate) fn plan(text: &str, summary: &MedicalSummary) -> Plan {
    Plan {
        treatment: treatment(&summary.treatment),
        follow_up: follow_up(text, &summary.prognosis),
    }
}

pub fn treatment(treatments: &[String]) -> String {
    if treatments.is_empty() {
        CONTINUE_MANAGEMENT.to_string()
    } else {
        treatments.join(", ").to_lowercase()
    }
}

/// Stated follow-up instructions, else a template keyed on the prognosis.
pub fn follow_up(text: &str, prognosis: &str) -> String {
    let stated = all_matches(&FOLLOW_UP_RULES, text);
    if !stated.is_empty() {
        return stated.join(". ");
    }

    if prognosis.to_lowercase().contains("full recovery") {
        FOLLOW_UP_AFTER_RECOVERY.to_string()
    } else {
        FOLLOW_UP_AS_NEEDED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treatment_text() {
        assert_eq!(treatment(&[]), "Continue current management");
        assert_eq!(
            treatment(&["10 sessions".into(), "Painkillers".into()]),
            "10 sessions, painkillers"
        );
    }

    #[test]
    fn test_stated_follow_up() {
        let text = "Please schedule a review next month. Come back if the pain returns.";
        assert_eq!(
            follow_up(text, "Not specified"),
            "Come back if the pain returns. schedule a review next month"
        );
    }

    #[test]
    fn test_follow_up_phrase() {
        assert_eq!(
            follow_up("We'll follow up in two weeks.", ""),
            "follow up in two weeks"
        );
    }

    #[test]
    fn test_follow_up_templates() {
        assert_eq!(
            follow_up("Nothing to add.", "full recovery within six months"),
            FOLLOW_UP_AFTER_RECOVERY
        );
        assert_eq!(follow_up("Nothing to add.", "Not specified"), FOLLOW_UP_AS_NEEDED);
    }
}
