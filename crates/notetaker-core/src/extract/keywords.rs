//! Keyword phrase extraction.

use crate::lexicon::{contains_any, Lexicon};
use crate::text;

/// Content words kept per phrase.
const WORDS_PER_PHRASE: usize = 10;

/// Phrases at or below this many characters are dropped.
const MIN_PHRASE_CHARS: usize = 10;

/// Extract up to `max_phrases` keyword phrases, in sentence order.
///
/// A sentence mentioning any lexicon term contributes one phrase: its first
/// ten tokens that are neither stopwords nor two characters or shorter.
/// Phrases are not deduplicated.
pub fn extract_keywords(text: &str, lexicon: &Lexicon, max_phrases: usize) -> Vec<String> {
    let keywords: Vec<&str> = lexicon.all().collect();
    let mut phrases = Vec::new();

    for sentence in text::sentences(text) {
        if phrases.len() >= max_phrases {
            break;
        }
        if !contains_any(&sentence.to_lowercase(), &keywords) {
            continue;
        }

        let important: Vec<&str> = text::words(sentence)
            .into_iter()
            .filter(|w| w.chars().count() > 2 && !text::is_stopword(w))
            .take(WORDS_PER_PHRASE)
            .collect();

        let phrase = important.join(" ");
        if phrase.chars().count() > MIN_PHRASE_CHARS {
            phrases.push(phrase);
        }
    }

    phrases
}
