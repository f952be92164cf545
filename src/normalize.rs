//! Text normalization and tokenization.
//!
//! Lowercases document text, collapses whitespace within lines while
//! preserving line boundaries (the segmenter depends on them), and splits
//! the result into tokens. Punctuation-joined technology names like
//! `c++`, `c#`, and `node.js` survive as single tokens.
//!
//! The stop-word list is a versioned data table: changing it changes
//! similarity scores, so it only moves with the crate version.

use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::AnalyzeError;

/// Alphanumeric run, optionally extended by `.part`, `+`, or `#` joins.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:\.[a-z0-9]+|[+#]+)*").unwrap());

/// Stop words removed before similarity scoring. v1.
pub static STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "before", "being", "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "during", "each", "for", "from", "further", "had", "has", "have", "having", "he",
    "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours",
];

/// Lowercased text with collapsed whitespace plus its token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedText {
    /// Lowercased text, spaces/tabs collapsed, line boundaries preserved.
    pub text: String,
    /// All tokens in document order.
    pub tokens: Vec<String>,
}

impl NormalizedText {
    /// Tokens with stop words removed.
    pub fn content_tokens(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !is_stop_word(t))
            .collect()
    }
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Normalize raw document text.
///
/// Fails with [`AnalyzeError::Decode`] if non-text control bytes are
/// present (the decoding collaborator should have ruled this out) and
/// with [`AnalyzeError::EmptyDocument`] if no tokens remain.
pub fn normalize(raw: &str) -> Result<NormalizedText, AnalyzeError> {
    if let Some(c) = raw
        .chars()
        .find(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
    {
        return Err(AnalyzeError::Decode(format!(
            "control byte U+{:04X} in document text",
            c as u32
        )));
    }

    let text = canonicalize(raw);
    let tokens = tokenize(&text);
    if tokens.is_empty() {
        return Err(AnalyzeError::EmptyDocument);
    }

    Ok(NormalizedText { text, tokens })
}

/// Split already-normalized text into tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// SHA-256 hex digest of the canonical (normalized) form of the text.
/// This is the stable cache-key component for a document.
pub fn content_digest(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonicalize(raw).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Lowercase and collapse spaces/tabs within each line, keeping line
/// boundaries so the segmenter can work on the same shape of text.
fn canonicalize(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            line.split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
