//! Tf-idf vectorization and cosine similarity.
//!
//! The vocabulary is the union of both documents' content tokens, so the
//! score depends only on the pair, never on which side is vectorized
//! first. The corpus for idf is exactly the two documents; the smoothed
//! form keeps shared terms at a nonzero weight. A pair with no shared
//! vocabulary scores 0.0 rather than erroring.

use std::collections::{BTreeSet, HashMap};

use crate::models::{SimilarityResult, TermWeight};
use crate::normalize::NormalizedText;

/// Documents in the idf corpus: the resume and the job description.
const CORPUS_SIZE: f64 = 2.0;

/// Smoothed inverse document frequency for a term appearing in `df` of
/// the two documents. `1 + ln((1 + N) / (1 + df))`, so a term in both
/// documents keeps weight 1.0 instead of vanishing.
fn idf(df: usize) -> f64 {
    1.0 + ((1.0 + CORPUS_SIZE) / (1.0 + df as f64)).ln()
}

fn term_counts<'a>(tokens: &[&'a str]) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(*token).or_insert(0) += 1;
    }
    counts
}

/// Score a resume against a job description.
///
/// Returns the cosine similarity in [0, 1] rounded to two decimal places
/// as a percentage, plus the `top_terms` highest-weight job-description
/// terms (ties broken alphabetically).
pub fn similarity(resume: &NormalizedText, job: &NormalizedText, top_terms: usize) -> SimilarityResult {
    let resume_counts = term_counts(&resume.content_tokens());
    let job_counts = term_counts(&job.content_tokens());

    // Sorted union keeps vector layout deterministic.
    let vocabulary: BTreeSet<&str> = resume_counts
        .keys()
        .chain(job_counts.keys())
        .copied()
        .collect();

    let mut resume_vec = Vec::with_capacity(vocabulary.len());
    let mut job_vec = Vec::with_capacity(vocabulary.len());
    let mut job_weights: Vec<TermWeight> = Vec::new();

    for term in &vocabulary {
        let r_tf = resume_counts.get(term).copied().unwrap_or(0);
        let j_tf = job_counts.get(term).copied().unwrap_or(0);
        let df = usize::from(r_tf > 0) + usize::from(j_tf > 0);
        let w = idf(df);

        resume_vec.push(r_tf as f64 * w);
        let j_weight = j_tf as f64 * w;
        job_vec.push(j_weight);
        if j_weight > 0.0 {
            job_weights.push(TermWeight {
                term: (*term).to_string(),
                weight: j_weight,
            });
        }
    }

    let score = round_score(cosine(&resume_vec, &job_vec).clamp(0.0, 1.0));

    job_weights.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    job_weights.truncate(top_terms);

    SimilarityResult {
        score,
        top_terms: job_weights,
    }
}

/// Cosine of two equal-length vectors. A zero vector on either side
/// yields 0.0 instead of dividing by zero.
fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Two decimal places as a percentage, so four fractional digits of the
/// unit score.
fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}
