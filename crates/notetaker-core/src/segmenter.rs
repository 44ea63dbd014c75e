//! Speaker segmentation by `Role:` line prefix.
//!
//! `Physician:` and `Doctor:` open a physician turn, `Patient:` opens a
//! patient turn. Untagged lines continue the most recent turn; untagged
//! lines before the first tag belong to nobody and are dropped.

use serde::{Deserialize, Serialize};

/// Who is speaking on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Physician,
    Patient,
}

/// Concatenated utterances per speaker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Speakers {
    pub physician: String,
    pub patient: String,
}

impl Speakers {
    /// Patient text, or `fallback` when no patient turn was found.
    pub fn patient_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.patient.is_empty() {
            fallback
        } else {
            &self.patient
        }
    }

    /// True when no tagged line was seen at all.
    pub fn is_empty(&self) -> bool {
        self.physician.is_empty() && self.patient.is_empty()
    }
}

/// Split a raw transcript into physician and patient text.
pub fn segment(transcript: &str) -> Speakers {
    let mut physician: Vec<&str> = Vec::new();
    let mut patient: Vec<&str> = Vec::new();
    let mut current: Option<Speaker> = None;

    for line in transcript.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let content = if let Some((speaker, rest)) = split_role(line) {
            current = Some(speaker);
            rest
        } else {
            line
        };

        if content.is_empty() {
            continue;
        }

        match current {
            Some(Speaker::Physician) => physician.push(content),
            Some(Speaker::Patient) => patient.push(content),
            None => {}
        }
    }

    Speakers {
        physician: physician.join(" "),
        patient: patient.join(" "),
    }
}

/// Recognise a role tag at the start of a trimmed line.
pub fn split_role(line: &str) -> Option<(Speaker, &str)> {
    const TAGS: [(&str, Speaker); 3] = [
        ("Physician:", Speaker::Physician),
        ("Doctor:", Speaker::Physician),
        ("Patient:", Speaker::Patient),
    ];

    TAGS.iter().find_map(|(tag, speaker)| {
        line.strip_prefix(tag)
            .map(|rest| (*speaker, rest.trim_start()))
    })
}
