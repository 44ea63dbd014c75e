//! Pretrained sentiment classifier capability.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary label emitted by a pretrained sentiment classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelLabel {
    Positive,
    Negative,
}

impl ModelLabel {
    /// Parse a classifier label such as `"POSITIVE"` or `"negative"`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" | "POS" => Some(ModelLabel::Positive),
            "NEGATIVE" | "NEG" => Some(ModelLabel::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for ModelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelLabel::Positive => f.write_str("POSITIVE"),
            ModelLabel::Negative => f.write_str("NEGATIVE"),
        }
    }
}

/// One classifier verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ModelPrediction {
    pub label: ModelLabel,
    pub confidence: f32,
}

/// Model loading and inference errors.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Model backend not compiled in (enable the `{0}` feature)")]
    FeatureDisabled(&'static str),

    #[error("Model initialization failed: {0}")]
    Init(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Invalid model config: {0}")]
    Config(String),

    #[error("Unknown label: {0}")]
    UnknownLabel(String),
}

/// A binary sentiment classifier over short text.
///
/// Implementations must be safe to share across threads.
pub trait SentimentModel: Send + Sync {
    /// Classify `text`. Callers truncate input beforehand.
    fn classify(&self, text: &str) -> Result<ModelPrediction, ModelError>;

    /// Model identifier for logs.
    fn name(&self) -> &str;
}

/// Mock classifier for testing without model weights.
///
/// Returns a fixed verdict, or an inference error when built with
/// [`MockSentimentModel::failing`].
#[derive(Debug, Clone)]
pub struct MockSentimentModel {
    verdict: Option<ModelPrediction>,
}

impl MockSentimentModel {
    pub fn new(label: ModelLabel, confidence: f32) -> Self {
        Self {
            verdict: Some(ModelPrediction { label, confidence }),
        }
    }

    pub fn positive() -> Self {
        Self::new(ModelLabel::Positive, 0.99)
    }

    pub fn negative() -> Self {
        Self::new(ModelLabel::Negative, 0.99)
    }

    /// A model whose every inference fails.
    pub fn failing() -> Self {
        Self { verdict: None }
    }
}

impl SentimentModel for MockSentimentModel {
    fn classify(&self, _text: &str) -> Result<ModelPrediction, ModelError> {
        self.verdict
            .ok_or_else(|| ModelError::Inference("mock model configured to fail".into()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        assert_eq!(ModelLabel::parse("POSITIVE"), Some(ModelLabel::Positive));
        assert_eq!(ModelLabel::parse(" negative "), Some(ModelLabel::Negative));
        assert_eq!(ModelLabel::parse("LABEL_0"), None);
    }

    #[test]
    fn test_label_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ModelLabel::Negative).unwrap(),
            "\"NEGATIVE\""
        );
        assert_eq!(ModelLabel::Positive.to_string(), "POSITIVE");
    }

    #[test]
    fn test_mock_model() {
        let verdict = MockSentimentModel::positive().classify("anything").unwrap();
        assert_eq!(verdict.label, ModelLabel::Positive);

        let err = MockSentimentModel::failing().classify("anything").unwrap_err();
        assert!(matches!(err, ModelError::Inference(_)));
    }
}
