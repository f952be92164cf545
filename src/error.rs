//! Error kinds surfaced by the analysis engine.
//!
//! Every variant renders a single flat message — the presentation layer
//! forwards `to_string()` as-is, with no nested error objects.

use thiserror::Error;

/// Message returned when a document normalizes to zero tokens.
pub const EMPTY_DOCUMENT_MESSAGE: &str =
    "The document appears empty. Please upload a file with content.";

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Non-text input reached the engine. The decoding collaborator is
    /// contractually required to rule this out, so hitting it is a
    /// programming error, not a user error.
    #[error("Document could not be decoded as text: {0}")]
    Decode(String),

    /// The normalized text contains no meaningful tokens.
    #[error("{}", EMPTY_DOCUMENT_MESSAGE)]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
