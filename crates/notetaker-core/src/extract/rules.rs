//! Declarative pattern tables.
//!
//! Each priority chain is an ordered slice of [`PatternRule`]s evaluated
//! first-match-wins. Tables are compiled once into `LazyLock` statics.

use regex::Regex;

/// Which part of a match a rule yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The whole match
    Whole,
    /// A numbered capture group
    Group(usize),
}

/// A compiled pattern with the capture it contributes.
#[derive(Debug)]
pub struct PatternRule {
    pub name: &'static str,
    regex: Regex,
    capture: Capture,
}

/// Build a rule from a pattern known to be valid.
pub fn rule(name: &'static str, pattern: &str, capture: Capture) -> PatternRule {
    PatternRule {
        name,
        regex: Regex::new(pattern).expect("Invalid extraction regex pattern"),
        capture,
    }
}

impl PatternRule {
    /// First match in `text`, trimmed; `None` when absent or blank.
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let matched = match self.capture {
            Capture::Whole => caps.get(0),
            Capture::Group(n) => caps.get(n),
        }?;
        let value = matched.as_str().trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Every non-overlapping whole match in `text`, as written.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Evaluate a priority table; the first rule that yields wins.
pub fn first_match(rules: &[PatternRule], text: &str) -> Option<String> {
    rules.iter().find_map(|r| {
        let value = r.apply(text)?;
        tracing::trace!(rule = r.name, "pattern matched");
        Some(value)
    })
}

/// Whole matches of every rule, rule by rule, in text order within a rule.
pub fn all_matches<'t>(rules: &[PatternRule], text: &'t str) -> Vec<&'t str> {
    rules.iter().flat_map(|r| r.find_all(text)).collect()
}

/// Append `value` unless an identical string is already present.
pub fn push_unique(values: &mut Vec<String>, value: impl Into<String>) {
    let value = value.into();
    if !values.contains(&value) {
        values.push(value);
    }
}
