//! Field extractors and the medical summary assembler.
//!
//! Pipeline: clean_text → per-field extractors → MedicalSummary
//!
//! Every extractor is a pure function of the cleaned transcript and the
//! lexicon, and always returns a value: a sentinel string or an empty list
//! when nothing matched.

mod diagnosis;
mod keywords;
mod matcher;
mod patient;
mod prognosis;
pub mod rules;
mod status;
mod symptoms;
mod treatment;

pub use diagnosis::*;
pub use keywords::*;
pub use matcher::*;
pub use patient::*;
pub use prognosis::*;
pub use status::*;
pub use symptoms::*;
pub use treatment::*;

use crate::lexicon::{contains_any, Lexicon};
use crate::models::MedicalSummary;
use crate::text;

/// Tunables for the summary assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Upper bound on keyword phrases in the summary
    pub max_keywords: usize,
    /// Run the token matcher as an extra symptom source
    pub token_matcher: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            token_matcher: true,
        }
    }
}

/// Assembles a [`MedicalSummary`] from the field extractors.
#[derive(Debug)]
pub struct MedicalExtractor {
    lexicon: &'static Lexicon,
    options: ExtractorOptions,
    matcher: Option<TokenMatcher>,
}

impl Default for MedicalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicalExtractor {
    /// Create an extractor with the standard lexicon and default options.
    pub fn new() -> Self {
        Self::with_options(ExtractorOptions::default())
    }

    /// Create an extractor with the standard lexicon.
    pub fn with_options(options: ExtractorOptions) -> Self {
        Self::with_lexicon(Lexicon::standard(), options)
    }

    /// Create an extractor over a custom lexicon.
    pub fn with_lexicon(lexicon: &'static Lexicon, options: ExtractorOptions) -> Self {
        let matcher = options.token_matcher.then(TokenMatcher::symptoms);
        Self {
            lexicon,
            options,
            matcher,
        }
    }

    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract a summary from a raw transcript.
    pub fn extract(&self, transcript: &str) -> MedicalSummary {
        self.extract_cleaned(&text::clean_text(transcript))
    }

    /// Extract a summary from text already passed through [`text::clean_text`].
    pub fn extract_cleaned(&self, text: &str) -> MedicalSummary {
        let summary = MedicalSummary {
            patient_name: extract_patient_name(text),
            symptoms: extract_symptoms(text, self.lexicon, self.matcher.as_ref()),
            diagnosis: extract_diagnosis(text),
            treatment: extract_treatment(text, self.lexicon),
            current_status: extract_current_status(text),
            prognosis: extract_prognosis(text),
            keywords: extract_keywords(text, self.lexicon, self.options.max_keywords),
        };

        tracing::debug!(
            symptoms = summary.symptoms.len(),
            treatments = summary.treatment.len(),
            keywords = summary.keywords.len(),
            has_diagnosis = summary.diagnosis != crate::NOT_SPECIFIED,
            has_prognosis = summary.prognosis != crate::NOT_SPECIFIED,
            has_status = summary.has_current_status(),
            "medical summary extracted"
        );

        summary
    }
}

/// Distinct sentences containing any of `keywords` (case-insensitive).
pub fn keyword_sentences<'t>(text: &'t str, keywords: &[&str]) -> Vec<&'t str> {
    let mut hits: Vec<&str> = Vec::new();
    for sentence in text::sentences(text) {
        if contains_any(&sentence.to_lowercase(), keywords) && !hits.contains(&sentence) {
            hits.push(sentence);
        }
    }
    hits
}
