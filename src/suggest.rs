//! Rendered improvement suggestions and overall feedback.
//!
//! Rules run in a fixed priority order and each contributes at most one
//! suggestion, so output order is stable: skill gap, weak verbs, missing
//! sections, length, metrics. The overall feedback line is banded by the
//! match percentage.

use crate::config::SuggestionConfig;
use crate::format::NO_METRICS_ISSUE;
use crate::models::{
    FormatReport, GapReport, SectionKind, SectionMap, Severity, Suggestion, SuggestionKind,
    VerbSummary,
};

/// One-line overall feedback banded by the match percentage.
pub fn feedback(match_percentage: f64) -> &'static str {
    if match_percentage >= 80.0 {
        "Excellent match! Your resume aligns very well with the job requirements."
    } else if match_percentage >= 60.0 {
        "Good match. Some adjustments could improve your alignment with the role."
    } else if match_percentage >= 40.0 {
        "Moderate match. Consider highlighting more relevant experience and skills."
    } else {
        "Low match. Your resume might need significant updates to target this role."
    }
}

/// Run every suggestion rule against the analysis signals.
pub fn generate(
    config: &SuggestionConfig,
    gap: &GapReport,
    verbs: &VerbSummary,
    format: &FormatReport,
    sections: &SectionMap,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !gap.missing.is_empty() {
        let names: Vec<&str> = gap.missing.iter().map(|s| s.canonical.as_str()).collect();
        suggestions.push(Suggestion {
            kind: SuggestionKind::SkillGap,
            severity: Severity::High,
            text: format!("Add missing skills: {}", names.join(", ")),
        });
    }

    if let Some(first) = verbs.weak_findings.first() {
        // Up to three concrete substitutions make the advice actionable.
        let examples: Vec<String> = verbs
            .weak_findings
            .iter()
            .filter_map(|f| {
                f.replacement
                    .as_ref()
                    .map(|r| format!("\"{}\" with \"{}\"", f.verb, r))
            })
            .take(3)
            .collect();
        let text = if examples.is_empty() {
            format!(
                "Strengthen {} bullet point(s) that open with weak verbs such as \"{}\"",
                verbs.weak, first.verb
            )
        } else {
            format!(
                "Strengthen {} bullet point(s) that open with weak verbs, e.g. replace {}",
                verbs.weak,
                examples.join(", ")
            )
        };
        suggestions.push(Suggestion {
            kind: SuggestionKind::WeakVerb,
            severity: Severity::Medium,
            text,
        });
    }

    let missing_sections: Vec<&str> = [
        (SectionKind::Experience, "experience"),
        (SectionKind::Education, "education"),
        (SectionKind::Skills, "skills"),
    ]
    .iter()
    .filter(|(kind, _)| !sections.has(*kind))
    .map(|(_, name)| *name)
    .collect();
    if !missing_sections.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionKind::MissingSection,
            severity: Severity::Medium,
            text: format!("Add sections for: {}", missing_sections.join(", ")),
        });
    }

    if format.word_count < config.min_words {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Length,
            severity: Severity::Low,
            text: "Expand on your experience and achievements (aim for 400-800 words)".to_string(),
        });
    } else if format.word_count > config.max_words {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Length,
            severity: Severity::Low,
            text: "Condense to 1-2 pages (800-1200 words) for better readability".to_string(),
        });
    }

    if format.issues.iter().any(|i| i == NO_METRICS_ISSUE) {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Metric,
            severity: Severity::Low,
            text: "Add metrics and numbers (e.g., \"Increased sales by 25%\", \"Managed team of 10\")"
                .to_string(),
        });
    }

    suggestions
}
