//! Physician Notetaker Core Library
//!
//! Rule-based clinical information extraction from physician-patient dialogue.
//!
//! # Architecture
//!
//! ```text
//!                         Raw transcript
//!                               │
//!             ┌─────────────────┼──────────────────────┐
//!             │                 │                      │
//!             ▼                 ▼                      │
//!      Speaker Segmenter   clean_text + Lexicon        │
//!             │                 │                      │
//!        patient text     Field Extractors             │
//!             │                 │                      │
//!             ▼                 ▼                      ▼
//!     Sentiment/Intent    MedicalSummary ──────► SOAP Composer
//!             │                 │                      │
//!             ▼                 ▼                      ▼
//!  sentiment_analysis.json  medical_summary.json   soap_note.json
//! ```
//!
//! # Core Principle
//!
//! **Every extractor always answers.** A field with no matching evidence takes
//! its sentinel (`"Not specified"`, `"Unknown"`, or an empty list); missing
//! collaborators degrade to heuristics instead of failing the run.
//!
//! # Modules
//!
//! - [`segmenter`]: `Role:` prefix speaker attribution
//! - [`lexicon`]: static clinical keyword sets
//! - [`text`]: cleaning, sentence splitting, word tokens, stopwords
//! - [`extract`]: field extractors and the summary assembler
//! - [`sentiment`]: sentiment and intent classification
//! - [`soap`]: SOAP note composition
//! - [`pipeline`]: one-shot run producing all three documents

pub mod extract;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod segmenter;
pub mod sentiment;
pub mod soap;
pub mod text;

mod sample;

// Re-export commonly used types
pub use extract::{ExtractorOptions, MedicalExtractor};
pub use lexicon::Lexicon;
pub use models::{
    Assessment, Intent, MedicalSummary, Objective, Plan, Sentiment, SentimentRecord, Severity,
    SoapNote, Subjective,
};
pub use pipeline::{Notetaker, NotetakerReport, OutputPaths};
pub use sample::SAMPLE_TRANSCRIPT;
pub use segmenter::{segment, Speakers};
pub use sentiment::{ModelError, ModelLabel, ModelPrediction, SentimentAnalyzer, SentimentModel};
pub use soap::SoapComposer;

use thiserror::Error;

/// Sentinel for string fields with no supporting evidence.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel for an unrecognised patient name.
pub const UNKNOWN_PATIENT: &str = "Unknown";

/// Errors surfaced by the pipeline.
///
/// Extraction itself never fails; only writing the output documents can.
#[derive(Error, Debug)]
pub enum NotetakerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NotetakerResult<T> = Result<T, NotetakerError>;
