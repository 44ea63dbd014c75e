//! Golden tests for the notetaker pipeline.
//!
//! These tests run whole transcripts through extraction, sentiment and SOAP
//! composition and check the fields a clinician would read first.

use notetaker_core::models::{Intent, Sentiment, Severity};
use notetaker_core::{Notetaker, SAMPLE_TRANSCRIPT};

/// A transcript and the fields it must produce.
struct GoldenCase {
    id: &'static str,
    transcript: &'static str,
    patient_name: &'static str,
    diagnosis: &'static str,
    symptoms_include: &'static [&'static str],
    sentiment: Sentiment,
    intent: Intent,
    severity: Severity,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "neck-and-back",
            transcript: "Patient: I have neck pain and back pain.\nPhysician: I see.",
            patient_name: "Unknown",
            diagnosis: "Not specified",
            symptoms_include: &["Neck pain", "Back pain"],
            sentiment: Sentiment::Neutral,
            intent: Intent::ReportingSymptoms,
            severity: Severity::MildToModerate,
        },
        GoldenCase {
            id: "mild-sprain",
            transcript: "Physician: Good afternoon, Mr. Patel.\n\
                         Patient: Hello. I twisted my ankle playing football.\n\
                         Physician: You were diagnosed with a mild sprain.",
            patient_name: "Patel",
            diagnosis: "a mild sprain",
            symptoms_include: &[],
            sentiment: Sentiment::Neutral,
            intent: Intent::GeneralInquiry,
            severity: Severity::Mild,
        },
        GoldenCase {
            id: "anxious-patient",
            transcript: "Doctor: What brings you in?\n\
                         Patient: I'm worried and nervous about this headache.\n\
                         It has been severe since Monday.",
            patient_name: "Unknown",
            diagnosis: "Not specified",
            symptoms_include: &["headache"],
            sentiment: Sentiment::Anxious,
            intent: Intent::SeekingReassurance,
            severity: Severity::Severe,
        },
        GoldenCase {
            id: "sample-consultation",
            transcript: SAMPLE_TRANSCRIPT,
            patient_name: "Jones",
            diagnosis: "whiplash injury",
            symptoms_include: &[
                "Neck pain",
                "Back pain",
                "Head pain",
                "trouble sleeping",
                "hit my head",
                "stiffness",
                "discomfort",
            ],
            sentiment: Sentiment::Reassured,
            intent: Intent::ReportingSymptoms,
            severity: Severity::Mild,
        },
    ]
}

#[test]
fn test_golden_cases() {
    let notetaker = Notetaker::new();

    for case in get_golden_cases() {
        let report = notetaker.run(case.transcript);

        assert_eq!(
            report.summary.patient_name, case.patient_name,
            "Case {}: patient name mismatch", case.id
        );
        assert_eq!(
            report.summary.diagnosis, case.diagnosis,
            "Case {}: diagnosis mismatch", case.id
        );
        for symptom in case.symptoms_include {
            assert!(
                report.summary.symptoms.iter().any(|s| s == symptom),
                "Case {}: missing symptom {:?} in {:?}",
                case.id, symptom, report.summary.symptoms
            );
        }
        assert_eq!(
            report.sentiment.sentiment, case.sentiment,
            "Case {}: sentiment mismatch", case.id
        );
        assert_eq!(
            report.sentiment.intent, case.intent,
            "Case {}: intent mismatch", case.id
        );
        assert_eq!(
            report.soap.assessment.severity, case.severity,
            "Case {}: severity mismatch", case.id
        );
        assert_eq!(
            report.soap.assessment.diagnosis, report.summary.diagnosis,
            "Case {}: assessment must copy the diagnosis", case.id
        );
    }
}

#[test]
fn test_sample_summary_fields() {
    let report = Notetaker::new().run(SAMPLE_TRANSCRIPT);
    let summary = &report.summary;

    assert_eq!(
        summary.prognosis,
        "full recovery within six months of the accident"
    );
    assert!(
        summary.current_status.starts_with("still experiencing pain now"),
        "unexpected status: {}",
        summary.current_status
    );
    for treatment in ["physiotherapy", "Physiotherapy", "painkiller", "Painkillers"] {
        assert!(
            summary.treatment.iter().any(|t| t == treatment),
            "missing treatment {treatment:?} in {:?}",
            summary.treatment
        );
    }
    assert!(!summary.keywords.is_empty());
    assert!(summary.keywords.len() <= 10);
}

#[test]
fn test_sample_soap_note() {
    let soap = Notetaker::new().run(SAMPLE_TRANSCRIPT).soap;

    assert!(soap.subjective.chief_complaint.ends_with(" and others"));
    assert!(soap
        .subjective
        .hpi
        .starts_with("Patient reports september 1st, around 12:30 in the afternoon. Diagnosed with whiplash injury."));
    assert_eq!(
        soap.objective.physical_exam,
        "full range of movement, and there's no tenderness or signs of lasting damage. \
         no tenderness or signs of lasting damage. \
         muscles and spine seem to be in good condition"
    );
    assert!(soap.objective.observations.contains("good condition"));
    assert_eq!(soap.plan.follow_up, "come back for a follow-up");
    assert!(soap.plan.treatment.contains("physiotherapy"));
    assert_eq!(soap.plan.treatment, soap.plan.treatment.to_lowercase());
}

#[test]
fn test_sample_documents_have_expected_keys() {
    let report = Notetaker::new().run(SAMPLE_TRANSCRIPT);

    let summary: serde_json::Value =
        serde_json::from_str(&report.summary_json().unwrap()).unwrap();
    for key in [
        "Patient_Name",
        "Symptoms",
        "Diagnosis",
        "Treatment",
        "Current_Status",
        "Prognosis",
        "Keywords",
    ] {
        assert!(summary.get(key).is_some(), "summary missing {key}");
    }

    let sentiment: serde_json::Value =
        serde_json::from_str(&report.sentiment_json().unwrap()).unwrap();
    assert_eq!(sentiment["Sentiment"], "Reassured");
    assert_eq!(sentiment["Intent"], "Reporting symptoms");

    let soap: serde_json::Value = serde_json::from_str(&report.soap_json().unwrap()).unwrap();
    assert!(soap["Subjective"]["Chief_Complaint"].is_string());
    assert!(soap["Subjective"]["History_of_Present_Illness"].is_string());
    assert!(soap["Objective"]["Physical_Exam"].is_string());
    assert!(soap["Objective"]["Observations"].is_string());
    assert!(soap["Assessment"]["Diagnosis"].is_string());
    assert_eq!(soap["Assessment"]["Severity"], "Mild");
    assert!(soap["Plan"]["Treatment"].is_string());
    assert!(soap["Plan"]["Follow-Up"].is_string());
}
