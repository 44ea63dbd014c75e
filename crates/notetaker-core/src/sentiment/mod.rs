//! Patient sentiment and intent classification.
//!
//! Runs on patient-only text. Sentiment comes from a pretrained classifier
//! when one is configured, gated by keyword evidence; any model failure
//! drops to the keyword-count rule. Intent is always keyword-scored.

mod model;
pub mod rules;

pub use model::*;

use crate::models::{Intent, Sentiment, SentimentRecord};
use crate::segmenter::segment;
use crate::text;

/// Characters of patient text handed to the classifier.
pub const MODEL_INPUT_CHARS: usize = 512;

/// Where the sentiment label comes from.
enum Backend {
    Keywords,
    Model(Box<dyn SentimentModel>),
}

/// Classifies patient sentiment and intent.
pub struct SentimentAnalyzer {
    backend: Backend,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("backend", &self.backend_name())
            .finish()
    }
}

impl SentimentAnalyzer {
    /// Keyword rules only.
    pub fn new() -> Self {
        Self {
            backend: Backend::Keywords,
        }
    }

    /// Pretrained classifier with keyword fallback.
    pub fn with_model(model: Box<dyn SentimentModel>) -> Self {
        Self {
            backend: Backend::Model(model),
        }
    }

    /// `"keywords"` or the model's name.
    pub fn backend_name(&self) -> &str {
        match &self.backend {
            Backend::Keywords => "keywords",
            Backend::Model(model) => model.name(),
        }
    }

    /// Analyze the patient side of a raw transcript.
    ///
    /// Falls back to the whole transcript when no `Patient:` turn exists.
    pub fn analyze(&self, transcript: &str) -> SentimentRecord {
        let speakers = segment(transcript);
        if speakers.patient.is_empty() {
            tracing::warn!("no patient turns found, analyzing full transcript");
        }
        let patient_text = speakers.patient_or(transcript);

        SentimentRecord {
            sentiment: self.classify_sentiment(patient_text),
            intent: self.detect_intent(patient_text),
        }
    }

    /// Three-way sentiment of `text`.
    pub fn classify_sentiment(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();

        if let Backend::Model(model) = &self.backend {
            match model.classify(text::truncate_chars(text, MODEL_INPUT_CHARS)) {
                Ok(prediction) => {
                    tracing::debug!(
                        model = model.name(),
                        label = %prediction.label,
                        confidence = prediction.confidence,
                        "sentiment model verdict"
                    );
                    return rules::gate_model_label(prediction.label == ModelLabel::Positive, &lower);
                }
                Err(e) => {
                    tracing::warn!(model = model.name(), error = %e, "sentiment model failed, using keyword rules");
                }
            }
        }

        rules::keyword_sentiment(&lower)
    }

    /// Best-matching intent of `text`.
    pub fn detect_intent(&self, text: &str) -> Intent {
        rules::score_intent(&text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_reporting_symptoms() {
        let record = SentimentAnalyzer::new()
            .analyze("Patient: I have neck pain and back pain.\nPhysician: I see.");
        assert_eq!(record.sentiment, Sentiment::Neutral);
        assert_eq!(record.intent, Intent::ReportingSymptoms);
    }

    #[test]
    fn test_only_patient_text_is_scored() {
        let transcript = "Physician: Are you worried or afraid?\nPatient: Not at all, thankful really.";
        let record = SentimentAnalyzer::new().analyze(transcript);
        assert_eq!(record.sentiment, Sentiment::Reassured);
    }

    #[test]
    fn test_untagged_transcript_uses_full_text() {
        let record = SentimentAnalyzer::new().analyze("I'm worried and nervous about this.");
        assert_eq!(record.sentiment, Sentiment::Anxious);
        assert_eq!(record.intent, Intent::SeekingReassurance);
    }

    #[test]
    fn test_model_verdict_gated_by_cues() {
        let analyzer = SentimentAnalyzer::with_model(Box::new(MockSentimentModel::positive()));
        assert_eq!(analyzer.classify_sentiment("That's a relief."), Sentiment::Reassured);
        assert_eq!(analyzer.classify_sentiment("Okay then."), Sentiment::Neutral);

        let analyzer = SentimentAnalyzer::with_model(Box::new(MockSentimentModel::negative()));
        assert_eq!(analyzer.classify_sentiment("I'm worried."), Sentiment::Anxious);
        assert_eq!(analyzer.classify_sentiment("It hurts."), Sentiment::Neutral);
    }

    #[test]
    fn test_model_overrides_keyword_count() {
        // Keyword rules alone would say Reassured (glad, great vs worried).
        let text = "Glad and great, though worried.";
        assert_eq!(SentimentAnalyzer::new().classify_sentiment(text), Sentiment::Reassured);

        let analyzer = SentimentAnalyzer::with_model(Box::new(MockSentimentModel::negative()));
        assert_eq!(analyzer.classify_sentiment(text), Sentiment::Anxious);
    }

    #[test]
    fn test_failing_model_falls_back_to_keywords() {
        let analyzer = SentimentAnalyzer::with_model(Box::new(MockSentimentModel::failing()));
        assert_eq!(analyzer.classify_sentiment("worried and afraid"), Sentiment::Anxious);
        assert_eq!(analyzer.backend_name(), "mock");
    }

    #[test]
    fn test_model_receives_truncated_input() {
        struct LengthProbe;
        impl SentimentModel for LengthProbe {
            fn classify(&self, text: &str) -> Result<ModelPrediction, ModelError> {
                assert!(text.chars().count() <= MODEL_INPUT_CHARS);
                Ok(ModelPrediction {
                    label: ModelLabel::Positive,
                    confidence: 1.0,
                })
            }
            fn name(&self) -> &str {
                "probe"
            }
        }

        let long = "relief ".repeat(200);
        let analyzer = SentimentAnalyzer::with_model(Box::new(LengthProbe));
        assert_eq!(analyzer.classify_sentiment(&long), Sentiment::Reassured);
    }
}
