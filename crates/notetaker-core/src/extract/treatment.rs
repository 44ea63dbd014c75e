//! Treatment extraction.
//!
//! Numbered variants (`"10 session"`), verbatim mentions (`"physiotherapy"`)
//! and normalised literals (`"Physiotherapy"`, `"Painkillers"`) are all kept
//! side by side; deduplication is by exact string only.

use std::sync::LazyLock;

use regex::Regex;

use super::keyword_sentences;
use super::rules::{all_matches, push_unique, rule, Capture, PatternRule};
use crate::lexicon::{contains_any, Lexicon};
use crate::text;

/// `<number> <context word>` scanners applied per sentence. Alternation is
/// leftmost-first, so `"10 sessions"` yields the context word `session`.
static NUMERIC_CONTEXT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\d+)\s*(session|sessions)",
        r"(?i)(\d+)\s*(physiotherapy|therapy|treatment)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid numeric context regex"))
    .collect()
});

static TREATMENT_PATTERNS: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            "numbered_therapy",
            r"(?i)\d+\s*(?:sessions?\s+of\s+)?(?:physiotherapy|therapy)",
            Capture::Whole,
        ),
        rule("therapy", r"(?i)physiotherapy|therapy|treatment", Capture::Whole),
        rule(
            "medication",
            r"(?i)painkiller|medication|medicine|analgesic",
            Capture::Whole,
        ),
    ]
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid number regex"));

const MEDICATION_WORDS: &[&str] = &["painkiller", "medication", "medicine"];

/// Extract distinct treatment mentions.
pub fn extract_treatment(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut treatments = Vec::new();

    for (number, context) in numbers_with_context(text) {
        push_unique(&mut treatments, format!("{number} {context}"));
    }

    for found in all_matches(&TREATMENT_PATTERNS, text) {
        push_unique(&mut treatments, found);
    }

    for sentence in keyword_sentences(text, lexicon.treatments) {
        let lower = sentence.to_lowercase();
        if lower.contains("physiotherapy") {
            match NUMBER.find(sentence) {
                Some(n) => push_unique(
                    &mut treatments,
                    format!("{} physiotherapy sessions", n.as_str()),
                ),
                None => push_unique(&mut treatments, "Physiotherapy"),
            }
        }
        if contains_any(&lower, MEDICATION_WORDS) {
            push_unique(&mut treatments, "Painkillers");
        }
    }

    treatments
}

/// `(number, context word)` pairs found sentence by sentence.
pub fn numbers_with_context(text: &str) -> Vec<(&str, &str)> {
    let mut found = Vec::new();
    for sentence in text::sentences(text) {
        for scanner in NUMERIC_CONTEXT.iter() {
            for caps in scanner.captures_iter(sentence) {
                if let (Some(number), Some(context)) = (caps.get(1), caps.get(2)) {
                    found.push((number.as_str(), context.as_str()));
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treatments(text: &str) -> Vec<String> {
        extract_treatment(text, Lexicon::standard())
    }

    #[test]
    fn test_numbered_sessions() {
        let found = treatments("I had 10 sessions of physiotherapy.");
        assert!(found.contains(&"10 session".to_string()));
        assert!(found.contains(&"10 sessions of physiotherapy".to_string()));
        assert!(found.contains(&"10 physiotherapy sessions".to_string()));
        assert!(found.contains(&"physiotherapy".to_string()));
    }

    #[test]
    fn test_redundant_variants_coexist() {
        let found = treatments("I had 10 sessions of physiotherapy. Physiotherapy helped a lot.");
        assert!(found.contains(&"10 physiotherapy sessions".to_string()));
        assert!(found.contains(&"Physiotherapy".to_string()));
    }

    #[test]
    fn test_painkillers_literal() {
        let found = treatments("I had to take painkillers regularly.");
        assert!(found.contains(&"painkiller".to_string()));
        assert!(found.contains(&"Painkillers".to_string()));
    }

    #[test]
    fn test_session_context_word_is_singular() {
        assert_eq!(numbers_with_context("I had 10 sessions."), vec![("10", "session")]);
        assert_eq!(numbers_with_context("Just 1 session."), vec![("1", "session")]);
    }

    #[test]
    fn test_number_directly_before_therapy() {
        let pairs = numbers_with_context("Booked 3 therapy visits and 2 treatment plans.");
        assert_eq!(pairs, vec![("3", "therapy"), ("2", "treatment")]);
    }

    #[test]
    fn test_spelled_out_numbers_are_not_numeric() {
        let found = treatments("I went through ten sessions of physiotherapy.");
        assert!(found.contains(&"Physiotherapy".to_string()));
        assert!(!found.iter().any(|t| t.starts_with("10")));
    }

    #[test]
    fn test_no_treatment() {
        assert!(treatments("Everything looks good.").is_empty());
    }
}
