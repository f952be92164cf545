//! Heading-based section segmentation.
//!
//! A prioritized rule list over a curated heading vocabulary, not a state
//! machine: each catalog entry maps a set of heading variants to a section
//! kind, in declaration order. A recognized heading opens a span that runs
//! until the next heading or end of document. Lines before the first
//! heading, and summary/objective zones, land in `Other`.

use crate::models::{SectionKind, SectionMap, SectionSpan};

/// Heading vocabulary in priority order. The longest matching variant
/// wins; ties break by declaration order.
const HEADING_CATALOG: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Contact,
        &["contact information", "personal information", "contact"],
    ),
    (
        SectionKind::Experience,
        &[
            "professional experience",
            "work experience",
            "employment history",
            "experience",
        ],
    ),
    (
        SectionKind::Education,
        &["academic background", "qualifications", "education"],
    ),
    (
        SectionKind::Skills,
        &[
            "technical skills",
            "core competencies",
            "technologies",
            "expertise",
            "skills",
        ],
    ),
    // Summary zones carry no label of their own: they open a fresh
    // Other span so summary text never bleeds into the preceding section.
    (
        SectionKind::Other,
        &["professional summary", "summary", "profile", "objective"],
    ),
];

/// Longest heading length we still consider a heading, in words.
const MAX_HEADING_WORDS: usize = 6;

/// Partition document lines into labeled spans covering the whole text.
pub fn segment(text: &str) -> SectionMap {
    let mut spans: Vec<SectionSpan> = Vec::new();
    let mut current: Option<SectionSpan> = None;

    for (line_no, line) in text.lines().enumerate() {
        if let Some(kind) = match_heading(line) {
            if let Some(span) = current.take() {
                spans.push(span);
            }
            current = Some(SectionSpan {
                kind,
                heading: Some(line.trim().to_string()),
                lines: Vec::new(),
                start_line: line_no,
            });
        } else {
            match current.as_mut() {
                Some(span) => span.lines.push(line.to_string()),
                None => {
                    // Preamble before any recognized heading.
                    current = Some(SectionSpan {
                        kind: SectionKind::Other,
                        heading: None,
                        lines: vec![line.to_string()],
                        start_line: line_no,
                    });
                }
            }
        }
    }

    if let Some(span) = current.take() {
        spans.push(span);
    }

    // No heading anywhere: the whole document is already one Other span.
    SectionMap { spans }
}

/// Match a line against the heading catalog. Returns the section kind of
/// the longest matching variant, or `None` if the line is not a heading.
fn match_heading(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim().trim_end_matches(':').trim_end();
    if trimmed.is_empty() || trimmed.split_whitespace().count() > MAX_HEADING_WORDS {
        return None;
    }
    let lowered = trimmed.to_lowercase();

    let mut best: Option<(usize, SectionKind)> = None;
    for (kind, variants) in HEADING_CATALOG {
        for variant in *variants {
            let hit = lowered == *variant
                || lowered.starts_with(&format!("{} ", variant))
                || lowered.starts_with(&format!("{}:", variant));
            // Strictly-greater keeps declaration order as the tie-break.
            if hit && best.map_or(true, |(len, _)| variant.len() > len) {
                best = Some((variant.len(), *kind));
            }
        }
    }

    best.map(|(_, kind)| kind)
}
