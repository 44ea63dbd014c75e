//! Structured medical summary extracted from a transcript.

use serde::{Deserialize, Serialize};

use crate::{NOT_SPECIFIED, UNKNOWN_PATIENT};

/// Structured clinical record for one transcript.
///
/// Serializes with the document keys of `medical_summary.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalSummary {
    /// Best-guess patient name, `"Unknown"` when nothing matched
    #[serde(rename = "Patient_Name")]
    pub patient_name: String,
    /// Distinct symptom mentions (treat as a set)
    #[serde(rename = "Symptoms")]
    pub symptoms: Vec<String>,
    /// Diagnosis phrase
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    /// Distinct treatment mentions
    #[serde(rename = "Treatment")]
    pub treatment: Vec<String>,
    /// What the patient reports now
    #[serde(rename = "Current_Status")]
    pub current_status: String,
    /// Expected outcome
    #[serde(rename = "Prognosis")]
    pub prognosis: String,
    /// Stopword-stripped phrases from clinically relevant sentences
    #[serde(rename = "Keywords")]
    pub keywords: Vec<String>,
}

impl Default for MedicalSummary {
    fn default() -> Self {
        Self {
            patient_name: UNKNOWN_PATIENT.to_string(),
            symptoms: Vec::new(),
            diagnosis: NOT_SPECIFIED.to_string(),
            treatment: Vec::new(),
            current_status: NOT_SPECIFIED.to_string(),
            prognosis: NOT_SPECIFIED.to_string(),
            keywords: Vec::new(),
        }
    }
}

impl MedicalSummary {
    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether a current status was actually found.
    pub fn has_current_status(&self) -> bool {
        self.current_status != NOT_SPECIFIED
    }
}
