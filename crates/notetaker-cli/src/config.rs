//! Environment configuration.

use std::path::PathBuf;

use anyhow::{bail, Context};
use notetaker_core::ExtractorOptions;

pub const OUTPUT_DIR_VAR: &str = "NOTETAKER_OUTPUT_DIR";
pub const SENTIMENT_MODEL_VAR: &str = "NOTETAKER_SENTIMENT_MODEL";
pub const TOKEN_MATCHER_VAR: &str = "NOTETAKER_TOKEN_MATCHER";
pub const MAX_KEYWORDS_VAR: &str = "NOTETAKER_MAX_KEYWORDS";

/// Runtime settings for one CLI run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory the three documents are written to
    pub output_dir: PathBuf,
    /// Pretrained sentiment model directory, if any
    pub sentiment_model: Option<PathBuf>,
    pub extractor: ExtractorOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            sentiment_model: None,
            extractor: ExtractorOptions::default(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let output_dir = get(OUTPUT_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let sentiment_model = get(SENTIMENT_MODEL_VAR).map(PathBuf::from);

        let token_matcher = match get(TOKEN_MATCHER_VAR) {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("{TOKEN_MATCHER_VAR}={value}"))?,
            None => defaults.extractor.token_matcher,
        };
        let max_keywords = match get(MAX_KEYWORDS_VAR) {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{MAX_KEYWORDS_VAR} must be a non-negative integer, got {value:?}"))?,
            None => defaults.extractor.max_keywords,
        };

        Ok(Self {
            output_dir,
            sentiment_model,
            extractor: ExtractorOptions {
                max_keywords,
                token_matcher,
            },
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn test_overrides() {
        let s = settings(&[
            (OUTPUT_DIR_VAR, "/tmp/notes"),
            (SENTIMENT_MODEL_VAR, "/models/sst2"),
            (TOKEN_MATCHER_VAR, "off"),
            (MAX_KEYWORDS_VAR, "4"),
        ])
        .unwrap();
        assert_eq!(s.output_dir, PathBuf::from("/tmp/notes"));
        assert_eq!(s.sentiment_model, Some(PathBuf::from("/models/sst2")));
        assert!(!s.extractor.token_matcher);
        assert_eq!(s.extractor.max_keywords, 4);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let s = settings(&[(SENTIMENT_MODEL_VAR, "  "), (OUTPUT_DIR_VAR, "")]).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(settings(&[(TOKEN_MATCHER_VAR, "maybe")]).is_err());
        assert!(settings(&[(MAX_KEYWORDS_VAR, "-1")]).is_err());
    }
}
