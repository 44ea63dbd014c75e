//! Pretrained sentiment classifier backend.
//!
//! Loads a binary sentiment classifier (a DistilBERT SST-2 export) from a
//! model directory and exposes it as a [`SentimentModel`]. The ONNX Runtime
//! backend is compiled only with the `onnx` feature; without it, loading
//! reports [`ModelError::FeatureDisabled`] and callers keep the keyword
//! rules.

pub mod labels;
#[cfg(feature = "onnx")]
mod onnx;

pub use labels::{prediction_from_logits, softmax, LabelMap};
pub use notetaker_core::sentiment::{
    MockSentimentModel, ModelError, ModelLabel, ModelPrediction, SentimentModel,
};
#[cfg(feature = "onnx")]
pub use onnx::OnnxSentimentModel;

use std::path::Path;

use notetaker_core::SentimentAnalyzer;

pub const MODEL_FILE: &str = "model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const CONFIG_FILE: &str = "config.json";

/// Load the classifier in `model_dir`.
pub fn load_sentiment_model(model_dir: &Path) -> Result<Box<dyn SentimentModel>, ModelError> {
    if !model_dir.is_dir() {
        return Err(ModelError::ModelNotFound(model_dir.display().to_string()));
    }

    #[cfg(feature = "onnx")]
    {
        Ok(Box::new(OnnxSentimentModel::load(model_dir)?))
    }

    #[cfg(not(feature = "onnx"))]
    {
        Err(ModelError::FeatureDisabled("onnx"))
    }
}

/// A sentiment analyzer backed by the model in `model_dir`, if it loads.
///
/// Any load failure is logged and yields the keyword-only analyzer.
pub fn analyzer_from_dir(model_dir: Option<&Path>) -> SentimentAnalyzer {
    let Some(dir) = model_dir else {
        return SentimentAnalyzer::new();
    };

    match load_sentiment_model(dir) {
        Ok(model) => SentimentAnalyzer::with_model(model),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "sentiment model unavailable, using keyword rules");
            SentimentAnalyzer::new()
        }
    }
}
