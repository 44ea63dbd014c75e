//! Token-level rule matcher.
//!
//! Matches sequences of word tokens where each position accepts a set of
//! lower-cased alternatives. Overlapping matches are all reported, so
//! `"neck pain"` yields both `"neck pain"` and `"pain"` under the symptom
//! rules.

use crate::text;

/// One token position: any of these lower-case words.
pub type TokenSlot = &'static [&'static str];

/// A named sequence of token slots.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    pub name: &'static str,
    pub slots: &'static [TokenSlot],
}

/// Matcher over a fixed set of token patterns.
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    patterns: Vec<TokenPattern>,
}

const SYMPTOM_PATTERNS: &[TokenPattern] = &[
    TokenPattern {
        name: "symptom_word",
        slots: &[&["pain", "ache", "discomfort", "stiffness"]],
    },
    TokenPattern {
        name: "body_part_pain",
        slots: &[&["neck", "back", "head", "shoulder"], &["pain"]],
    },
    TokenPattern {
        name: "trouble",
        slots: &[&["trouble"], &["sleeping", "concentrating"]],
    },
];

impl TokenMatcher {
    pub fn new(patterns: Vec<TokenPattern>) -> Self {
        Self { patterns }
    }

    /// Matcher loaded with the symptom rules.
    pub fn symptoms() -> Self {
        Self::new(SYMPTOM_PATTERNS.to_vec())
    }

    /// Matched spans, tokens joined by single spaces, in text order.
    pub fn find(&self, text: &str) -> Vec<String> {
        let tokens = text::words(text);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut found = Vec::new();

        for start in 0..tokens.len() {
            for pattern in &self.patterns {
                let end = start + pattern.slots.len();
                if end > tokens.len() {
                    continue;
                }
                let hit = pattern
                    .slots
                    .iter()
                    .zip(&lowered[start..end])
                    .all(|(slot, token)| slot.iter().any(|word| *word == token.as_str()));
                if hit {
                    found.push(tokens[start..end].join(" "));
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_multi_token_matches() {
        let matcher = TokenMatcher::symptoms();
        let found = matcher.find("My Neck pain and some stiffness.");
        assert_eq!(found, vec!["Neck pain", "pain", "stiffness"]);
    }

    #[test]
    fn test_trouble_pattern() {
        let matcher = TokenMatcher::symptoms();
        assert_eq!(matcher.find("I had trouble concentrating"), vec!["trouble concentrating"]);
    }

    #[test]
    fn test_partial_words_do_not_match() {
        let matcher = TokenMatcher::symptoms();
        assert!(matcher.find("painkillers and backaches").is_empty());
    }

    #[test]
    fn test_pattern_at_end_of_text() {
        let matcher = TokenMatcher::symptoms();
        assert_eq!(matcher.find("my back"), Vec::<String>::new());
    }
}
