//! Structural-format assessment of resume text.
//!
//! Starts at 100 and deducts per detected issue: missing contact details,
//! length outside the useful range, no quantified achievements, layout
//! characters that defeat automated parsing, and absent core sections.
//! Strengths are reported for the checks that pass cleanly.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{FormatReport, SectionKind, SectionMap};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,2}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap()
});

/// Below this word count the resume reads as too thin.
pub const MIN_WORDS: usize = 200;
/// Above this word count the resume reads as too long.
pub const MAX_WORDS: usize = 1500;

pub(crate) const NO_METRICS_ISSUE: &str = "No quantifiable achievements found";

/// Assess the raw resume text plus its section map.
pub fn assess(raw_text: &str, sections: &SectionMap) -> FormatReport {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    let has_email = EMAIL_RE.is_match(raw_text);
    let has_phone = PHONE_RE.is_match(raw_text);
    if !has_email {
        issues.push("Missing email address".to_string());
        score -= 10;
    }
    if !has_phone {
        issues.push("Missing phone number".to_string());
        score -= 5;
    }
    if has_email && has_phone {
        strengths.push("Contact information is complete".to_string());
    }

    let word_count = raw_text.split_whitespace().count();
    if word_count < MIN_WORDS {
        issues.push("Resume appears too short".to_string());
        score -= 15;
    } else if word_count > MAX_WORDS {
        issues.push("Resume may be too long".to_string());
        score -= 10;
    }
    if (400..=1200).contains(&word_count) {
        strengths.push("Resume length is appropriate".to_string());
    }

    let has_numbers = raw_text.chars().any(|c| c.is_ascii_digit());
    if has_numbers {
        strengths.push("Includes quantifiable achievements".to_string());
    } else {
        issues.push(NO_METRICS_ISSUE.to_string());
        score -= 15;
    }

    if raw_text.contains('|') || raw_text.contains('\u{2503}') {
        issues.push("May contain tables or columns that confuse automated parsing".to_string());
        score -= 10;
    }

    let missing: Vec<&str> = [
        (SectionKind::Experience, "experience"),
        (SectionKind::Education, "education"),
        (SectionKind::Skills, "skills"),
    ]
    .iter()
    .filter(|(kind, _)| !sections.has(*kind))
    .map(|(_, name)| *name)
    .collect();
    if !missing.is_empty() {
        issues.push(format!("Missing common sections: {}", missing.join(", ")));
        score -= 10;
    }

    FormatReport {
        score: score.max(0) as u32,
        issues,
        strengths,
        word_count,
    }
}
