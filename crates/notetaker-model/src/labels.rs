//! Classifier head labels and logit decoding.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use notetaker_core::sentiment::{ModelError, ModelLabel, ModelPrediction};

/// The slice of a HuggingFace `config.json` needed to read the head.
#[derive(Debug, Deserialize)]
struct HeadConfig {
    #[serde(default)]
    id2label: BTreeMap<String, String>,
}

/// Output index to sentiment label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: Vec<ModelLabel>,
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::sst2()
    }
}

impl LabelMap {
    /// SST-2 head order: `0 = NEGATIVE`, `1 = POSITIVE`.
    pub fn sst2() -> Self {
        Self {
            labels: vec![ModelLabel::Negative, ModelLabel::Positive],
        }
    }

    /// Parse the `id2label` table of a model config.
    ///
    /// Indices must be contiguous from zero and every label must be a
    /// recognised sentiment label.
    pub fn from_config_json(json: &str) -> Result<Self, ModelError> {
        let config: HeadConfig =
            serde_json::from_str(json).map_err(|e| ModelError::Config(e.to_string()))?;
        if config.id2label.is_empty() {
            return Err(ModelError::Config("id2label is missing or empty".into()));
        }

        let mut indexed: Vec<(usize, ModelLabel)> = Vec::with_capacity(config.id2label.len());
        for (id, name) in &config.id2label {
            let idx: usize = id
                .parse()
                .map_err(|_| ModelError::Config(format!("non-numeric label id {id:?}")))?;
            let label =
                ModelLabel::parse(name).ok_or_else(|| ModelError::UnknownLabel(name.clone()))?;
            indexed.push((idx, label));
        }
        indexed.sort_by_key(|(idx, _)| *idx);

        if indexed.iter().enumerate().any(|(pos, (idx, _))| pos != *idx) {
            return Err(ModelError::Config("label ids are not contiguous from 0".into()));
        }

        Ok(Self {
            labels: indexed.into_iter().map(|(_, label)| label).collect(),
        })
    }

    /// Read the label map from a config file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ModelError::Config(format!("{}: {e}", path.display())))?;
        Self::from_config_json(&json)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, idx: usize) -> Option<ModelLabel> {
        self.labels.get(idx).copied()
    }
}

/// Numerically stable softmax.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Arg-max label and its probability.
pub fn prediction_from_logits(
    logits: &[f32],
    labels: &LabelMap,
) -> Result<ModelPrediction, ModelError> {
    if logits.len() != labels.len() {
        return Err(ModelError::Inference(format!(
            "expected {} logits, got {}",
            labels.len(),
            logits.len()
        )));
    }

    let probs = softmax(logits);
    let (idx, confidence) = probs
        .iter()
        .copied()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| ModelError::Inference("empty logits".into()))?;

    let label = labels
        .label(idx)
        .ok_or_else(|| ModelError::Inference(format!("no label for index {idx}")))?;

    Ok(ModelPrediction { label, confidence })
}
