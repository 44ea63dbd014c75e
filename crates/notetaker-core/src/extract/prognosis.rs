//! Prognosis extraction.

use std::sync::LazyLock;

use super::rules::{first_match, rule, Capture, PatternRule};
use crate::NOT_SPECIFIED;

static PROGNOSIS_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            "full_recovery_timing",
            r"(?i)full\s+recovery\s+(?:expected|within|in)\s+[^.]+",
            Capture::Whole,
        ),
        rule(
            "recovery_timing",
            r"(?i)recovery\s+(?:expected|within|in)\s+[^.]+",
            Capture::Whole,
        ),
        rule("prognosis", r"(?i)prognosis[^.]+", Capture::Whole),
        rule("expect_recovery", r"(?i)expect\s+[^.]+recovery[^.]+", Capture::Whole),
        rule(
            "no_signs_of",
            r"(?i)no\s+(?:signs?|indication)\s+of\s+[^.]+",
            Capture::Whole,
        ),
    ]
});

/// A "full recovery" phrase carrying a time frame.
static FULL_RECOVERY_WINDOW: LazyLock<PatternRule> = LazyLock::new(|| {
    rule(
        "full_recovery_window",
        r"(?i)full\s+recovery[^.]*\d+\s*(?:months?|weeks?)[^.]*",
        Capture::Whole,
    )
});

pub const FULL_RECOVERY_EXPECTED: &str = "Full recovery expected";
pub const CONDITION_IMPROVING: &str = "Condition improving";

/// Extract the prognosis phrase.
pub fn extract_prognosis(text: &str) -> String {
    if let Some(found) = first_match(&PROGNOSIS_RULES, text) {
        return found;
    }

    let lower = text.to_lowercase();
    if lower.contains("full recovery") {
        return FULL_RECOVERY_WINDOW
            .apply(text)
            .unwrap_or_else(|| FULL_RECOVERY_EXPECTED.to_string());
    }
    if lower.contains("improving") || lower.contains("better") {
        return CONDITION_IMPROVING.to_string();
    }

    NOT_SPECIFIED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_recovery_within() {
        assert_eq!(
            extract_prognosis("I'd expect you to make a full recovery within six months of the accident. Good."),
            "full recovery within six months of the accident"
        );
    }

    #[test]
    fn test_expect_recovery() {
        assert_eq!(
            extract_prognosis("We expect a steady recovery over the summer. Fine."),
            "expect a steady recovery over the summer"
        );
    }

    #[test]
    fn test_full_recovery_rule_order() {
        assert_eq!(
            extract_prognosis("Full recovery expected in a few weeks."),
            "Full recovery expected in a few weeks"
        );
    }

    #[test]
    fn test_recovery_timing() {
        assert_eq!(
            extract_prognosis("Recovery within two weeks is likely. Rest up."),
            "Recovery within two weeks is likely"
        );
    }

    #[test]
    fn test_prognosis_phrase_beats_expect_recovery() {
        assert_eq!(
            extract_prognosis("Prognosis is good and we expect recovery soon. Bye."),
            "Prognosis is good and we expect recovery soon"
        );
    }

    #[test]
    fn test_no_signs_of() {
        assert_eq!(
            extract_prognosis("There are no signs of long-term damage."),
            "no signs of long-term damage"
        );
    }

    #[test]
    fn test_full_recovery_window_with_time_frame() {
        assert_eq!(
            extract_prognosis("On track for a full recovery, about 6 months out."),
            "full recovery, about 6 months out"
        );
    }

    #[test]
    fn test_full_recovery_literal() {
        assert_eq!(
            extract_prognosis("You're on track for a full recovery."),
            "Full recovery expected"
        );
    }

    #[test]
    fn test_condition_improving() {
        assert_eq!(extract_prognosis("I'm doing better now."), "Condition improving");
    }

    #[test]
    fn test_not_specified() {
        assert_eq!(extract_prognosis("Hello."), "Not specified");
    }
}
