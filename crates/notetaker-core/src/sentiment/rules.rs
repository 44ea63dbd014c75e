//! Keyword rules for sentiment and intent.

use crate::lexicon::{contains_any, count_present};
use crate::models::{Intent, Sentiment};

/// Evidence that lets a NEGATIVE model verdict become `Anxious`.
pub const MODEL_ANXIOUS_CUES: &[&str] = &["worry", "worried", "concerned", "anxious", "afraid"];

/// Evidence that lets a POSITIVE model verdict become `Reassured`.
pub const MODEL_REASSURED_CUES: &[&str] = &["relief", "relieved", "good to hear", "thank"];

pub const ANXIOUS_KEYWORDS: &[&str] = &[
    "worried",
    "concerned",
    "anxious",
    "afraid",
    "fear",
    "nervous",
    "apprehensive",
];

pub const REASSURED_KEYWORDS: &[&str] = &[
    "relief",
    "relieved",
    "glad",
    "thankful",
    "appreciate",
    "good to hear",
    "great",
];

/// Keyword list for a scored intent category.
pub fn intent_keywords(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::SeekingReassurance => &[
            "worry",
            "worried",
            "concerned",
            "anxious",
            "hope",
            "wondering",
            "afraid",
            "fear",
            "nervous",
            "apprehensive",
            "uncertain",
        ],
        Intent::ReportingSymptoms => &[
            "pain",
            "ache",
            "discomfort",
            "feeling",
            "experiencing",
            "having",
            "symptoms",
            "problem",
            "issue",
            "trouble",
        ],
        Intent::ExpressingConcern => &[
            "concern",
            "worried about",
            "afraid of",
            "fear that",
            "not sure",
            "uncertain",
            "question",
        ],
        Intent::SeekingInformation => &[
            "what",
            "how",
            "why",
            "when",
            "where",
            "explain",
            "tell me",
            "understand",
            "mean",
            "question",
        ],
        Intent::ExpressingRelief => &[
            "relief",
            "relieved",
            "glad",
            "happy",
            "thankful",
            "appreciate",
            "good to hear",
            "great",
            "wonderful",
        ],
        Intent::GeneralInquiry => &[],
    }
}

/// Keyword-count sentiment: the strictly larger nonzero count wins.
pub fn keyword_sentiment(text_lower: &str) -> Sentiment {
    let anxious = count_present(text_lower, ANXIOUS_KEYWORDS);
    let reassured = count_present(text_lower, REASSURED_KEYWORDS);

    if anxious > reassured {
        Sentiment::Anxious
    } else if reassured > anxious {
        Sentiment::Reassured
    } else {
        Sentiment::Neutral
    }
}

/// Map a binary model verdict onto the three-way scale.
///
/// A verdict only moves off `Neutral` when the text carries matching cues.
pub fn gate_model_label(positive: bool, text_lower: &str) -> Sentiment {
    if positive {
        if contains_any(text_lower, MODEL_REASSURED_CUES) {
            Sentiment::Reassured
        } else {
            Sentiment::Neutral
        }
    } else if contains_any(text_lower, MODEL_ANXIOUS_CUES) {
        Sentiment::Anxious
    } else {
        Sentiment::Neutral
    }
}

/// Highest-scoring intent; ties go to the earlier category.
pub fn score_intent(text_lower: &str) -> Intent {
    let mut best = Intent::GeneralInquiry;
    let mut best_score = 0;

    for intent in Intent::SCORED {
        let score = count_present(text_lower, intent_keywords(intent));
        if score > best_score {
            best = intent;
            best_score = score;
        }
    }

    best
}
