//! Objective section: examination findings and observations.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::rules::{all_matches, push_unique, rule, Capture, PatternRule};
use crate::models::Objective;

pub const NOT_DOCUMENTED: &str = "Not documented";

const OBSERVATION_CUES: &[&str] = &["appears", "normal", "good condition", "healthy", "gait"];
const MAX_OBSERVATIONS: usize = 3;
const MAX_OBSERVATION_CHARS: usize = 200;

static EXAM_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule("physical_examination", r"(?i)physical\s+examination[^.]+", Capture::Whole),
        rule("exam", r"(?i)exam[^.]+", Capture::Whole),
        rule("checked", r"(?i)checked[^.]+", Capture::Whole),
        rule("range_of_movement", r"(?i)range\s+of\s+movement[^.]+", Capture::Whole),
        rule("tenderness", r"(?i)tenderness[^.]+", Capture::Whole),
    ]
});

/// A specific finding, tried only when its trigger words occur.
struct Finding {
    triggers: &'static [&'static str],
    rule: PatternRule,
}

static SPECIFIC_FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    vec![
        Finding {
            triggers: &["range of movement", "range of motion"],
            rule: rule(
                "full_range_of_movement",
                r"(?i)full\s+range\s+of\s+movement[^.]+",
                Capture::Whole,
            ),
        },
        Finding {
            triggers: &["tenderness"],
            rule: rule(
                "tenderness_finding",
                r"(?i)no\s+tenderness[^.]+|tenderness[^.]+",
                Capture::Whole,
            ),
        },
        Finding {
            triggers: &["muscle", "spine"],
            rule: rule(
                "muscle_spine",
                r"(?i)muscle[^.]+spine[^.]+|spine[^.]+muscle[^.]+",
                Capture::Whole,
            ),
        },
    ]
});

static OBSERVATION_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    OBSERVATION_CUES
        .iter()
        .map(|cue| {
            Regex::new(&format!(r"(?i)[^.]*{}[^.]*", regex::escape(cue)))
                .expect("Invalid observation regex")
        })
        .collect()
});

pub(crate) fn objective(text: &str) -> Objective {
    Objective {
        physical_exam: physical_exam(text),
        observations: observations(text),
    }
}

/// Examination findings; specific findings replace the generic scan.
pub fn physical_exam(text: &str) -> String {
    let lower = text.to_lowercase();
    let specific: Vec<String> = SPECIFIC_FINDINGS
        .iter()
        .filter(|f| f.triggers.iter().any(|t| lower.contains(t)))
        .filter_map(|f| f.rule.apply(text))
        .collect();
    if !specific.is_empty() {
        return specific.join(". ");
    }

    let generic = all_matches(&EXAM_RULES, text);
    if generic.is_empty() {
        NOT_DOCUMENTED.to_string()
    } else {
        generic.join(". ")
    }
}

/// Up to three distinct sentences carrying an observation cue.
pub fn observations(text: &str) -> String {
    let mut found: Vec<String> = Vec::new();
    for scanner in OBSERVATION_RULES.iter() {
        for m in scanner.find_iter(text) {
            let sentence = m.as_str().trim();
            if !sentence.is_empty() && sentence.chars().count() < MAX_OBSERVATION_CHARS {
                push_unique(&mut found, sentence);
            }
        }
    }

    if found.is_empty() {
        NOT_DOCUMENTED.to_string()
    } else {
        found.truncate(MAX_OBSERVATIONS);
        found.join(". ")
    }
}
