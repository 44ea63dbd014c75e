//! Patient sentiment and intent models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-way patient sentiment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Anxious,
    Neutral,
    Reassured,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Anxious => "Anxious",
            Sentiment::Neutral => "Neutral",
            Sentiment::Reassured => "Reassured",
        };
        f.write_str(label)
    }
}

/// What the patient is trying to do in the conversation.
///
/// Variant order is the tie-break order for intent scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Intent {
    #[serde(rename = "Seeking reassurance")]
    SeekingReassurance,
    #[serde(rename = "Reporting symptoms")]
    ReportingSymptoms,
    #[serde(rename = "Expressing concern")]
    ExpressingConcern,
    #[serde(rename = "Seeking information")]
    SeekingInformation,
    #[serde(rename = "Expressing relief")]
    ExpressingRelief,
    /// No intent keyword matched
    #[serde(rename = "General inquiry")]
    GeneralInquiry,
}

impl Intent {
    /// Scored categories, in tie-break order.
    pub const SCORED: [Intent; 5] = [
        Intent::SeekingReassurance,
        Intent::ReportingSymptoms,
        Intent::ExpressingConcern,
        Intent::SeekingInformation,
        Intent::ExpressingRelief,
    ];

    /// Human-readable label as written to the output document.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::SeekingReassurance => "Seeking reassurance",
            Intent::ReportingSymptoms => "Reporting symptoms",
            Intent::ExpressingConcern => "Expressing concern",
            Intent::SeekingInformation => "Seeking information",
            Intent::ExpressingRelief => "Expressing relief",
            Intent::GeneralInquiry => "General inquiry",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentiment document for the patient side of a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentRecord {
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Intent")]
    pub intent: Intent,
}

impl SentimentRecord {
    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
