//! One-shot pipeline: transcript in, three documents out.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::extract::MedicalExtractor;
use crate::models::{MedicalSummary, SentimentRecord, SoapNote};
use crate::sentiment::SentimentAnalyzer;
use crate::soap::SoapComposer;
use crate::text;
use crate::NotetakerResult;

pub const SUMMARY_FILE: &str = "medical_summary.json";
pub const SENTIMENT_FILE: &str = "sentiment_analysis.json";
pub const SOAP_FILE: &str = "soap_note.json";

/// Extractor, analyzer and composer wired together.
#[derive(Debug, Default)]
pub struct Notetaker {
    extractor: MedicalExtractor,
    analyzer: SentimentAnalyzer,
    composer: SoapComposer,
}

impl Notetaker {
    /// Standard lexicon, keyword sentiment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(extractor: MedicalExtractor, analyzer: SentimentAnalyzer) -> Self {
        Self {
            extractor,
            analyzer,
            composer: SoapComposer::new(),
        }
    }

    pub fn extractor(&self) -> &MedicalExtractor {
        &self.extractor
    }

    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Produce all three documents for one transcript.
    ///
    /// The summary, sentiment and SOAP note are independent of each other
    /// except that the note consumes the summary.
    pub fn run(&self, transcript: &str) -> NotetakerReport {
        let fingerprint = text::fingerprint(transcript);
        let span = tracing::info_span!(
            "notetaker_run",
            transcript = &fingerprint[..12],
            chars = transcript.chars().count(),
        );
        let _enter = span.enter();

        let summary = self.extractor.extract(transcript);
        let sentiment = self.analyzer.analyze(transcript);
        let soap = self.composer.compose(transcript, &summary);

        tracing::info!(
            symptoms = summary.symptoms.len(),
            sentiment = %sentiment.sentiment,
            intent = %sentiment.intent,
            severity = %soap.assessment.severity,
            backend = self.analyzer.backend_name(),
            "transcript processed"
        );

        NotetakerReport {
            summary,
            sentiment,
            soap,
        }
    }
}

/// The three documents produced for one transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotetakerReport {
    pub summary: MedicalSummary,
    pub sentiment: SentimentRecord,
    pub soap: SoapNote,
}

/// Where [`NotetakerReport::write_to`] put each document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub summary: PathBuf,
    pub sentiment: PathBuf,
    pub soap: PathBuf,
}

impl NotetakerReport {
    pub fn summary_json(&self) -> NotetakerResult<String> {
        Ok(self.summary.to_json()?)
    }

    pub fn sentiment_json(&self) -> NotetakerResult<String> {
        Ok(self.sentiment.to_json()?)
    }

    pub fn soap_json(&self) -> NotetakerResult<String> {
        Ok(self.soap.to_json()?)
    }

    /// Write the three documents into `dir`, creating it if needed.
    ///
    /// Existing files are overwritten.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> NotetakerResult<OutputPaths> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let paths = OutputPaths {
            summary: dir.join(SUMMARY_FILE),
            sentiment: dir.join(SENTIMENT_FILE),
            soap: dir.join(SOAP_FILE),
        };

        fs::write(&paths.summary, self.summary_json()?)?;
        fs::write(&paths.sentiment, self.sentiment_json()?)?;
        fs::write(&paths.soap, self.soap_json()?)?;

        tracing::info!(dir = %dir.display(), "documents written");
        Ok(paths)
    }
}
