//! SOAP note models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subjective section: what the patient reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subjective {
    #[serde(rename = "Chief_Complaint")]
    pub chief_complaint: String,
    #[serde(rename = "History_of_Present_Illness")]
    pub hpi: String,
}

/// Objective section: examination findings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Objective {
    #[serde(rename = "Physical_Exam")]
    pub physical_exam: String,
    #[serde(rename = "Observations")]
    pub observations: String,
}

/// Condition severity, in the wording used by the note.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Severe,
    Moderate,
    #[serde(rename = "Mild, improving")]
    MildImproving,
    #[serde(rename = "Mild to moderate")]
    MildToModerate,
    Mild,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Severe => "Severe",
            Severity::Moderate => "Moderate",
            Severity::MildImproving => "Mild, improving",
            Severity::MildToModerate => "Mild to moderate",
            Severity::Mild => "Mild",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Assessment section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    #[serde(rename = "Severity")]
    pub severity: Severity,
}

/// Plan section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(rename = "Treatment")]
    pub treatment: String,
    #[serde(rename = "Follow-Up")]
    pub follow_up: String,
}

/// Complete SOAP note, recomputed per run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoapNote {
    #[serde(rename = "Subjective")]
    pub subjective: Subjective,
    #[serde(rename = "Objective")]
    pub objective: Objective,
    #[serde(rename = "Assessment")]
    pub assessment: Assessment,
    #[serde(rename = "Plan")]
    pub plan: Plan,
}

impl SoapNote {
    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
