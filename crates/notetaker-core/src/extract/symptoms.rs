//! Symptom extraction.
//!
//! Three additive sources:
//! - explicit symptom patterns, kept as written
//! - lexicon sentences mentioning a body part and pain, normalised to
//!   `"<Part> pain"`
//! - the optional [`TokenMatcher`]

use std::sync::LazyLock;

use super::keyword_sentences;
use super::matcher::TokenMatcher;
use super::rules::{all_matches, push_unique, rule, Capture, PatternRule};
use crate::lexicon::{contains_any, Lexicon, BODY_PARTS};
use crate::text::capitalize;

static SYMPTOM_PATTERNS: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            "body_part_pain",
            r"(?i)neck\s+pain|back\s+pain|head\s+pain|headache",
            Capture::Whole,
        ),
        rule(
            "musculoskeletal",
            r"(?i)discomfort|stiffness|tenderness",
            Capture::Whole,
        ),
        rule(
            "trouble",
            r"(?i)trouble\s+(?:sleeping|concentrating)",
            Capture::Whole,
        ),
        rule(
            "impact",
            r"(?i)hit\s+(?:my|the)\s+(?:head|neck|back)",
            Capture::Whole,
        ),
    ]
});

/// Words that mark a sentence as describing pain.
const PAIN_MARKERS: &[&str] = &["pain", "ache", "discomfort"];

/// Extract distinct symptom mentions.
///
/// Deduplication is by exact string, so `"back pain"` and `"Back pain"` can
/// both appear. Callers should treat the result as a set.
pub fn extract_symptoms(
    text: &str,
    lexicon: &Lexicon,
    matcher: Option<&TokenMatcher>,
) -> Vec<String> {
    let mut symptoms = Vec::new();

    for found in all_matches(&SYMPTOM_PATTERNS, text) {
        push_unique(&mut symptoms, found);
    }

    for sentence in keyword_sentences(text, lexicon.symptoms) {
        for symptom in body_part_pains(sentence) {
            push_unique(&mut symptoms, symptom);
        }
    }

    if let Some(matcher) = matcher {
        for found in matcher.find(text) {
            push_unique(&mut symptoms, found);
        }
    }

    symptoms
}

/// `"<Part> pain"` for each body part in a sentence that mentions pain.
pub fn body_part_pains(sentence: &str) -> Vec<String> {
    let lower = sentence.to_lowercase();
    if !contains_any(&lower, PAIN_MARKERS) || !lower.contains("pain") {
        return Vec::new();
    }

    BODY_PARTS
        .iter()
        .filter(|part| lower.contains(*part))
        .map(|part| format!("{} pain", capitalize(part)))
        .collect()
}
