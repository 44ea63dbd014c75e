//! ONNX Runtime sentiment classifier.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use tokenizers::{Tokenizer, TruncationParams};

use notetaker_core::sentiment::{ModelError, ModelPrediction, SentimentModel};

use crate::labels::{prediction_from_logits, LabelMap};
use crate::{CONFIG_FILE, MODEL_FILE, TOKENIZER_FILE};

/// Longest token sequence the encoder accepts.
const MAX_TOKENS: usize = 512;

/// DistilBERT-style sequence classifier exported to ONNX.
///
/// Requires in the model directory:
/// - `model.onnx`: weights taking `input_ids` and `attention_mask`
/// - `tokenizer.json`: HuggingFace tokenizer definition
/// - `config.json` (optional): `id2label` head order, SST-2 order otherwise
///
/// The session sits behind a `Mutex` because `Session::run` takes
/// `&mut self` while [`SentimentModel`] exposes `&self`.
pub struct OnnxSentimentModel {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    labels: LabelMap,
    name: String,
}

impl OnnxSentimentModel {
    /// Load the classifier from a model directory.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);
        let config_path = model_dir.join(CONFIG_FILE);

        if !model_path.exists() {
            return Err(ModelError::ModelNotFound(model_path.display().to_string()));
        }
        if !tokenizer_path.exists() {
            return Err(ModelError::ModelNotFound(
                tokenizer_path.display().to_string(),
            ));
        }

        let labels = if config_path.exists() {
            LabelMap::load(&config_path)?
        } else {
            tracing::debug!("no config.json, assuming SST-2 label order");
            LabelMap::sst2()
        };

        let session = Session::builder()
            .map_err(|e: ort::Error| ModelError::Init(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e: ort::Error| ModelError::Init(e.to_string()))?
            .commit_from_file(&model_path)
            .map_err(|e: ort::Error| ModelError::Init(format!("ONNX load failed: {e}")))?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ModelError::Init(format!("Tokenizer load failed: {e}")))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_TOKENS,
                ..TruncationParams::default()
            }))
            .map_err(|e| ModelError::Init(format!("Tokenizer truncation: {e}")))?;

        let name = model_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "onnx".to_string());

        tracing::info!(model = %name, labels = labels.len(), "ONNX sentiment model loaded from {}", model_dir.display());

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            labels,
            name,
        })
    }

    fn logits(&self, text: &str) -> Result<Vec<f32>, ModelError> {
        use ort::value::TensorRef;

        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ModelError::Tokenization(e.to_string()))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let seq_len = input_ids.len();

        let ids_array = ndarray::Array2::from_shape_vec((1, seq_len), input_ids)
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        let mask_array = ndarray::Array2::from_shape_vec((1, seq_len), attention_mask)
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let ids_tensor = TensorRef::from_array_view(&ids_array)
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        let mask_tensor = TensorRef::from_array_view(&mask_array)
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ModelError::Inference("Session lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| ModelError::Inference(format!("ONNX inference failed: {e}")))?;

        // Output shape: [1, num_labels]
        let (shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Output extraction: {e}")))?;

        if shape.len() != 2 || shape[1] as usize != self.labels.len() {
            return Err(ModelError::Inference(format!(
                "Unexpected output shape: {shape:?}, expected [1, {}]",
                self.labels.len()
            )));
        }

        Ok(data.to_vec())
    }
}

impl SentimentModel for OnnxSentimentModel {
    fn classify(&self, text: &str) -> Result<ModelPrediction, ModelError> {
        let logits = self.logits(text)?;
        prediction_from_logits(&logits, &self.labels)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
