//! Clinical keyword lexicons.
//!
//! Read-only, process-wide keyword sets shared by every extractor. Matching
//! against them is case-insensitive substring presence.

/// Keyword sets consumed by the field extractors.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub symptoms: &'static [&'static str],
    pub treatments: &'static [&'static str],
    pub diagnoses: &'static [&'static str],
    pub prognoses: &'static [&'static str],
}

/// Symptom terms.
pub const SYMPTOM_KEYWORDS: &[&str] = &[
    "pain",
    "ache",
    "discomfort",
    "stiffness",
    "sore",
    "tender",
    "numbness",
    "tingling",
    "headache",
    "dizziness",
    "nausea",
    "fatigue",
    "weakness",
    "swelling",
    "inflammation",
    "difficulty",
    "trouble",
    "problem",
];

/// Treatment terms.
pub const TREATMENT_KEYWORDS: &[&str] = &[
    "treatment",
    "therapy",
    "physiotherapy",
    "medication",
    "medicine",
    "painkiller",
    "analgesic",
    "surgery",
    "operation",
    "injection",
    "session",
    "appointment",
    "prescription",
    "exercise",
    "rehabilitation",
];

/// Diagnosis terms.
pub const DIAGNOSIS_KEYWORDS: &[&str] = &[
    "diagnosis",
    "diagnosed",
    "condition",
    "injury",
    "disease",
    "disorder",
    "syndrome",
    "fracture",
    "strain",
    "sprain",
    "whiplash",
    "concussion",
];

/// Prognosis terms.
pub const PROGNOSIS_KEYWORDS: &[&str] = &[
    "recovery",
    "prognosis",
    "outcome",
    "expect",
    "forecast",
    "improve",
    "heal",
    "resolve",
    "chronic",
    "acute",
    "long-term",
    "short-term",
    "full recovery",
    "partial recovery",
    "recurrence",
];

/// Body parts recognised when normalising "<part> pain" symptoms.
pub const BODY_PARTS: &[&str] = &["neck", "back", "head", "shoulder", "arm", "leg"];

/// Conditions scanned for when no explicit diagnosis phrase exists.
pub const CONDITION_KEYWORDS: &[&str] = &["whiplash", "injury", "strain", "sprain", "fracture"];

static STANDARD: Lexicon = Lexicon {
    symptoms: SYMPTOM_KEYWORDS,
    treatments: TREATMENT_KEYWORDS,
    diagnoses: DIAGNOSIS_KEYWORDS,
    prognoses: PROGNOSIS_KEYWORDS,
};

impl Lexicon {
    /// The built-in clinical lexicon.
    pub fn standard() -> &'static Lexicon {
        &STANDARD
    }

    /// Every keyword across the four sets, in set order.
    pub fn all(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symptoms
            .iter()
            .chain(self.treatments)
            .chain(self.diagnoses)
            .chain(self.prognoses)
            .copied()
    }
}

/// True when `haystack_lower` contains any of `keywords`.
///
/// The haystack must already be lower-cased.
pub fn contains_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack_lower.contains(k))
}

/// Number of distinct `keywords` present in `haystack_lower`.
pub fn count_present(haystack_lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|k| haystack_lower.contains(*k))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase() {
        for keyword in Lexicon::standard().all() {
            assert_eq!(keyword, keyword.to_lowercase(), "{keyword} is not lowercase");
        }
    }

    #[test]
    fn test_all_covers_every_set() {
        let lexicon = Lexicon::standard();
        let total = lexicon.symptoms.len()
            + lexicon.treatments.len()
            + lexicon.diagnoses.len()
            + lexicon.prognoses.len();
        assert_eq!(lexicon.all().count(), total);
    }

    #[test]
    fn test_count_present_counts_each_keyword_once() {
        let text = "worried, worried and more worried";
        assert_eq!(count_present(text, &["worried", "anxious"]), 1);
        assert!(contains_any(text, &["anxious", "worried"]));
        assert!(!contains_any(text, &["relief"]));
    }
}
