//! Subjective section: chief complaint and history of present illness.

use std::sync::LazyLock;

use crate::extract::rules::{first_match, rule, Capture, PatternRule};
use crate::lexicon::contains_any;
use crate::models::{MedicalSummary, Subjective};
use crate::text;
use crate::NOT_SPECIFIED;

const COMPLAINT_CUES: &[&str] = &["pain", "ache", "discomfort", "problem"];
const COMPLAINT_MAX_CHARS: usize = 100;
const LISTED_SYMPTOMS: usize = 3;
const FALLBACK_SENTENCES: usize = 3;

static TIMELINE_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            "month_date",
            r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d+[^.]*",
            Capture::Whole,
        ),
        rule("weeks_ago", r"(?i)\d+\s+weeks?\s+ago[^.]*", Capture::Whole),
        rule("last", r"(?i)\blast\s+[^.]+", Capture::Whole),
    ]
});

pub(crate) fn subjective(text: &str, patient_text: &str, summary: &MedicalSummary) -> Subjective {
    Subjective {
        chief_complaint: chief_complaint(patient_text, &summary.symptoms),
        hpi: history_of_present_illness(text, patient_text, summary),
    }
}

/// Summarise the symptom list, or quote the patient's opening complaint.
pub fn chief_complaint(patient_text: &str, symptoms: &[String]) -> String {
    match symptoms.len() {
        0 => {}
        1 => return symptoms[0].clone(),
        n if n <= LISTED_SYMPTOMS => return symptoms.join(" and "),
        _ => return format!("{} and others", symptoms[..LISTED_SYMPTOMS].join(", ")),
    }

    let first = patient_text.split('.').next().unwrap_or("").trim();
    if contains_any(&first.to_lowercase(), COMPLAINT_CUES) {
        return text::truncate_chars(first, COMPLAINT_MAX_CHARS).to_string();
    }

    NOT_SPECIFIED.to_string()
}

/// Templated narrative built from the summary fields.
pub fn history_of_present_illness(
    text: &str,
    patient_text: &str,
    summary: &MedicalSummary,
) -> String {
    let mut parts = Vec::new();

    if let Some(timeline) = first_match(&TIMELINE_RULES, text) {
        parts.push(format!("Patient reports {}.", timeline.to_lowercase()));
    }
    if !summary.diagnosis.is_empty() {
        parts.push(format!("Diagnosed with {}.", summary.diagnosis.to_lowercase()));
    }
    if !summary.symptoms.is_empty() {
        parts.push(format!(
            "Presented with {}.",
            summary.symptoms.join(", ").to_lowercase()
        ));
    }
    if !summary.treatment.is_empty() {
        parts.push(format!(
            "Received {}.",
            summary.treatment.join(", ").to_lowercase()
        ));
    }
    if summary.has_current_status() {
        parts.push(format!(
            "Current status: {}.",
            summary.current_status.to_lowercase()
        ));
    }

    if parts.is_empty() {
        parts = patient_text
            .split('.')
            .take(FALLBACK_SENTENCES)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{s}."))
            .collect();
    }

    if parts.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        parts.join(" ")
    }
}
