//! # Resume Match
//!
//! A resume / job-description matching and feedback engine.
//!
//! Resume Match normalizes uploaded document text, segments resumes into
//! labeled sections, extracts skills and experience bullets, scores the
//! pair with tf-idf cosine similarity, and renders a skills-gap report
//! with prioritized improvement suggestions. A digest-keyed cache with
//! single-flight computation backs both single and batch analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌───────────────────┐   ┌─────────────┐
//! │ Documents │──▶│     Pipeline      │──▶│  Analysis   │
//! │ resume/jd │   │ normalize+segment │   │   Result    │
//! └───────────┘   │  skills+score     │   └──────┬──────┘
//!                 └─────────┬─────────┘          │
//!                           │              ┌─────┴─────┐
//!                     ┌─────┴─────┐        ▼           ▼
//!                     │   Cache   │   ┌─────────┐ ┌─────────┐
//!                     │ (digests) │   │ Single  │ │  Batch  │
//!                     └───────────┘   └─────────┘ └─────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`normalize`] | Text normalization and tokenization |
//! | [`sections`] | Heading-based section segmentation |
//! | [`bullets`] | Bullet-point extraction |
//! | [`skills`] | Skill extraction and gap computation |
//! | [`verbs`] | Leading-verb strength classification |
//! | [`score`] | Tf-idf cosine similarity |
//! | [`format`] | Structural-format assessment |
//! | [`suggest`] | Suggestion rules and overall feedback |
//! | [`analyze`] | The single-pair analysis pipeline |
//! | [`cache`] | Digest-keyed single-flight result cache |
//! | [`batch`] | Batched analysis with ranking and stats |

pub mod analyze;
pub mod batch;
pub mod bullets;
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
pub mod score;
pub mod sections;
pub mod skills;
pub mod suggest;
pub mod verbs;

pub use analyze::analyze;
pub use batch::run_batch;
pub use cache::AnalysisCache;
pub use config::{load_config, EngineConfig};
pub use error::{AnalyzeError, EMPTY_DOCUMENT_MESSAGE};
pub use models::{AnalysisResult, BatchSummary, Document, DocumentRole};
