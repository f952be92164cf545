//! Core data types flowing through the matching engine.
//!
//! These are the documents, extracted signals, and analysis outputs that
//! the pipeline produces. Everything the presentation or persistence
//! collaborators consume is `Serialize`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalize;

/// Which side of the match a document represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    Resume,
    JobDescription,
}

/// An already-decoded text document handed in by the upload collaborator.
///
/// Immutable after creation. The digest is a SHA-256 over the normalized
/// text and serves as the cache key component for this document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub role: DocumentRole,
    pub text: String,
    pub digest: String,
}

impl Document {
    /// Create a document, generating an id and computing the content digest.
    pub fn new(role: DocumentRole, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            digest: normalize::content_digest(&text),
            text,
        }
    }

    /// Create a document with a caller-supplied identifier.
    pub fn with_id(id: impl Into<String>, role: DocumentRole, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            role,
            digest: normalize::content_digest(&text),
            text,
        }
    }

    /// Create a document with a digest the upload collaborator already
    /// computed. The digest is trusted as-is.
    pub fn with_digest(
        id: impl Into<String>,
        role: DocumentRole,
        text: impl Into<String>,
        digest: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            text: text.into(),
            digest: digest.into(),
        }
    }
}

/// Labeled resume zones recognized by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contact,
    Education,
    Experience,
    Skills,
    Other,
}

/// A contiguous run of lines belonging to one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub kind: SectionKind,
    /// The heading line that opened this span, if any.
    pub heading: Option<String>,
    pub lines: Vec<String>,
    /// Zero-based line number of the first line in the span.
    pub start_line: usize,
}

/// Ordered, non-overlapping partition of a document's lines into sections.
/// Every line of the source text belongs to exactly one span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionMap {
    pub spans: Vec<SectionSpan>,
}

impl SectionMap {
    /// Concatenated text of all spans with the given kind, in order.
    pub fn text_for(&self, kind: SectionKind) -> String {
        let mut lines: Vec<&str> = Vec::new();
        for span in self.spans.iter().filter(|s| s.kind == kind) {
            lines.extend(span.lines.iter().map(String::as_str));
        }
        lines.join("\n")
    }

    pub fn has(&self, kind: SectionKind) -> bool {
        self.spans
            .iter()
            .any(|s| s.kind == kind && s.lines.iter().any(|l| !l.trim().is_empty()))
    }
}

/// Strength classification of a bullet's leading verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbStrength {
    Strong,
    Weak,
    Unclassified,
}

/// A bullet line extracted from the experience section, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub text: String,
    pub verb: Option<String>,
    pub strength: VerbStrength,
}

/// Catalog-declared primary category of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Cloud,
    Language,
    Framework,
    Tool,
    Concept,
}

/// A canonical skill found in a document, with the alias strings that
/// matched. Two mentions of the same canonical name are deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMention {
    pub canonical: String,
    pub category: SkillCategory,
    pub aliases: Vec<String>,
}

/// One term of the job-description vector with its tf-idf weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

/// Cosine similarity between the resume and job-description vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Match score in [0, 1], rounded to two decimals as a percentage.
    pub score: f64,
    /// Highest-weight job-description terms, ties broken alphabetically.
    pub top_terms: Vec<TermWeight>,
}

impl SimilarityResult {
    /// The score as a percentage with two decimal places.
    pub fn percentage(&self) -> f64 {
        (self.score * 10_000.0).round() / 100.0
    }
}

/// Matching/missing partition of the job description's skill set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub matching: Vec<SkillMention>,
    pub missing: Vec<SkillMention>,
}

/// A weak-verb bullet with its suggested substitution, when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakVerbFinding {
    pub bullet: String,
    pub verb: String,
    pub replacement: Option<String>,
}

/// Counts per verb classification plus the weak-verb findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerbSummary {
    pub total: usize,
    pub strong: usize,
    pub weak: usize,
    pub unclassified: usize,
    pub missing_verb: usize,
    pub weak_findings: Vec<WeakVerbFinding>,
}

/// Structural-format assessment of the resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatReport {
    /// 0–100, starts at 100 with deductions per issue.
    pub score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
    pub word_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    SkillGap,
    WeakVerb,
    MissingSection,
    Length,
    Metric,
}

/// A rendered improvement recommendation. Output order follows rule
/// priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub severity: Severity,
    pub text: String,
}

/// Full analysis output for one resume / job-description pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub resume_id: String,
    pub similarity: SimilarityResult,
    pub gap: GapReport,
    pub verbs: VerbSummary,
    pub format: FormatReport,
    /// One-line overall feedback banded by match percentage.
    pub feedback: String,
    pub suggestions: Vec<Suggestion>,
    pub analyzed_at: DateTime<Utc>,
}

/// A successfully analyzed batch entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    pub resume_id: String,
    pub result: std::sync::Arc<AnalysisResult>,
}

/// A per-document failure reported alongside the successful entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub resume_id: String,
    pub error: String,
}

/// Aggregate statistics over the analyzed entries of a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    pub analyzed: usize,
    pub failed: usize,
    pub mean: f64,
    pub best: f64,
    pub worst: f64,
    pub best_resume_id: Option<String>,
}

/// Ranked results for one batch request: score descending, ties in
/// submission order. Failures are excluded from the statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub ranked: Vec<BatchItem>,
    pub failures: Vec<BatchFailure>,
    pub stats: BatchStats,
}
