//! SOAP note composition.
//!
//! Pipeline: (raw transcript, MedicalSummary) → Subjective, Objective,
//! Assessment, Plan → SoapNote
//!
//! Regex scans run over the cleaned transcript. Patient text comes from
//! segmenting the raw transcript, since cleaning flattens line structure;
//! an untagged transcript uses the cleaned text instead.

mod assessment;
mod objective;
mod plan;
mod subjective;

pub use assessment::severity;
pub use objective::{observations, physical_exam, NOT_DOCUMENTED};
pub use plan::{
    follow_up, treatment, CONTINUE_MANAGEMENT, FOLLOW_UP_AFTER_RECOVERY, FOLLOW_UP_AS_NEEDED,
};
pub use subjective::{chief_complaint, history_of_present_illness};

use crate::models::{MedicalSummary, SoapNote};
use crate::segmenter::segment;
use crate::text;

/// Composes a [`SoapNote`] from a transcript and its summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoapComposer;

impl SoapComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose a SOAP note.
    pub fn compose(&self, transcript: &str, summary: &MedicalSummary) -> SoapNote {
        let cleaned = text::clean_text(transcript);
        let speakers = segment(transcript);
        let patient_text = speakers.patient_or(&cleaned);

        let note = SoapNote {
            subjective: subjective::subjective(&cleaned, patient_text, summary),
            objective: objective::objective(&cleaned),
            assessment: assessment::assessment(&cleaned, summary),
            plan: plan::plan(&cleaned, summary),
        };

        tracing::debug!(severity = %note.assessment.severity, "SOAP note composed");
        note
    }
}
