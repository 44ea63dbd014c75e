//! Diagnosis extraction.

use std::sync::LazyLock;

use super::rules::{first_match, rule, Capture, PatternRule};
use crate::lexicon::CONDITION_KEYWORDS;
use crate::NOT_SPECIFIED;

/// Explicit diagnosis phrasings, highest priority first.
static DIAGNOSIS_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule("whiplash_injury", r"(?i)whiplash\s+injury", Capture::Whole),
        rule("diagnosed_with", r"(?i)diagnosed\s+with\s+([^.]+)", Capture::Group(1)),
        rule("it_was", r"(?i)it\s+was\s+(?:a|an)\s+([^.]+)", Capture::Group(1)),
    ]
});

/// Words kept on each side of a condition keyword.
const WINDOW: usize = 2;

/// Extract the diagnosis phrase.
///
/// Explicit phrasings win in table order regardless of where they occur in
/// the text. Otherwise a short window around the first condition keyword is
/// used.
pub fn extract_diagnosis(text: &str) -> String {
    first_match(&DIAGNOSIS_RULES, text)
        .or_else(|| condition_window(text))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Window of words around the first condition keyword found.
///
/// Keywords are tried in list order. For a keyword present in the text, the
/// first period-delimited sentence holding it as a standalone word supplies
/// the window.
pub fn condition_window(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    CONDITION_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .find_map(|keyword| {
            text.split('.')
                .filter(|sentence| sentence.to_lowercase().contains(keyword))
                .find_map(|sentence| window_around(sentence, keyword))
        })
}

fn window_around(sentence: &str, keyword: &str) -> Option<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let idx = words.iter().position(|w| w.to_lowercase() == keyword)?;
    let start = idx.saturating_sub(WINDOW);
    let end = (idx + WINDOW + 1).min(words.len());
    Some(words[start..end].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whiplash_injury() {
        assert_eq!(
            extract_diagnosis("They said it was a whiplash injury, but no X-rays."),
            "whiplash injury"
        );
    }

    #[test]
    fn test_whiplash_preferred_over_earlier_diagnosed_with() {
        let text = "I was diagnosed with a sprain. Later they found a whiplash injury.";
        assert_eq!(extract_diagnosis(text), "whiplash injury");
    }

    #[test]
    fn test_diagnosed_with_is_trimmed() {
        assert_eq!(
            extract_diagnosis("The doctor diagnosed with a mild sprain. Rest is advised."),
            "a mild sprain"
        );
    }

    #[test]
    fn test_it_was_an() {
        assert_eq!(
            extract_diagnosis("It was an ankle fracture. We put a cast on."),
            "ankle fracture"
        );
    }

    #[test]
    fn test_keyword_window_fallback() {
        assert_eq!(
            extract_diagnosis("I have a neck strain from lifting boxes at work"),
            "a neck strain from lifting"
        );
    }

    #[test]
    fn test_keyword_window_clamps_to_sentence() {
        assert_eq!(
            extract_diagnosis("Sprain suspected. Rest."),
            "Sprain suspected"
        );
    }

    #[test]
    fn test_keyword_must_be_standalone_word() {
        // "strain," carries punctuation, so no window can be built.
        assert_eq!(extract_diagnosis("Just a strain, nothing else"), "Not specified");
    }

    #[test]
    fn test_not_specified() {
        assert_eq!(extract_diagnosis("Everything looks good."), "Not specified");
    }
}
