//! Assessment section: diagnosis and severity.

use crate::lexicon::contains_any;
use crate::models::{Assessment, MedicalSummary, Severity};

const SEVERE: &[&str] = &["severe", "serious", "critical", "acute"];
const MILD: &[&str] = &["mild", "minor", "slight", "occasional"];
const IMPROVING_STATUS: &[&str] = &["improving", "better", "recovering"];
const GOOD_PROGNOSIS: &[&str] = &["full recovery", "no long-term"];

pub(crate) fn assessment(text: &str, summary: &MedicalSummary) -> Assessment {
    Assessment {
        diagnosis: summary.diagnosis.clone(),
        severity: severity(text, summary),
    }
}

/// Severity by fixed priority over the transcript and summary.
pub fn severity(text: &str, summary: &MedicalSummary) -> Severity {
    let text = text.to_lowercase();

    if contains_any(&text, SEVERE) {
        Severity::Severe
    } else if contains_any(&text, MILD) {
        Severity::Mild
    } else if contains_any(&summary.current_status.to_lowercase(), IMPROVING_STATUS)
        || contains_any(&summary.prognosis.to_lowercase(), GOOD_PROGNOSIS)
    {
        Severity::MildImproving
    } else if text.contains("moderate") {
        Severity::Moderate
    } else {
        Severity::MildToModerate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(status: &str, prognosis: &str) -> MedicalSummary {
        MedicalSummary {
            current_status: status.into(),
            prognosis: prognosis.into(),
            ..MedicalSummary::default()
        }
    }

    #[test]
    fn test_severe_beats_everything() {
        let s = summary("doing better", "full recovery");
        assert_eq!(severity("Severe but mild now, moderate.", &s), Severity::Severe);
    }

    #[test]
    fn test_mild_beats_status() {
        let s = summary("improving", "Not specified");
        assert_eq!(severity("only occasional twinges", &s), Severity::Mild);
    }

    #[test]
    fn test_improving_from_status_or_prognosis() {
        assert_eq!(
            severity("moderate", &summary("Recovering well", "Not specified")),
            Severity::MildImproving
        );
        assert_eq!(
            severity("moderate", &summary("Not specified", "no long-term damage")),
            Severity::MildImproving
        );
    }

    #[test]
    fn test_moderate_and_default() {
        let s = MedicalSummary::default();
        assert_eq!(severity("a moderate sprain", &s), Severity::Moderate);
        assert_eq!(severity("a sprain", &s), Severity::MildToModerate);
    }

    #[test]
    fn test_diagnosis_copied_verbatim() {
        let s = MedicalSummary {
            diagnosis: "Whiplash injury".into(),
            ..MedicalSummary::default()
        };
        assert_eq!(assessment("", &s).diagnosis, "Whiplash injury");
    }
}
