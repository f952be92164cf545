//! Batch analysis: many resumes against one job description.
//!
//! Each resume is analyzed through the shared cache on its own task,
//! bounded by a semaphore sized from the batch config. Per-document
//! failures are isolated: they surface as failure entries and never
//! abort the remaining items. Results rank by score descending with
//! submission order breaking ties.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::cache::AnalysisCache;
use crate::config::EngineConfig;
use crate::models::{BatchFailure, BatchItem, BatchStats, BatchSummary, Document};

/// Analyze every resume in the batch against the job description.
pub async fn run_batch(
    config: Arc<EngineConfig>,
    cache: Arc<AnalysisCache>,
    resumes: Vec<Document>,
    job: Document,
) -> BatchSummary {
    let semaphore = Arc::new(Semaphore::new(config.batch.effective_workers()));
    let job = Arc::new(job);

    let mut handles = Vec::with_capacity(resumes.len());
    for (index, resume) in resumes.into_iter().enumerate() {
        let config = Arc::clone(&config);
        let cache = Arc::clone(&cache);
        let job = Arc::clone(&job);
        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            let outcome = cache.get_or_analyze(&config, &resume, &job).await;
            (index, resume.id, outcome)
        }));
    }

    let mut ranked: Vec<(usize, BatchItem)> = Vec::new();
    let mut failures: Vec<(usize, BatchFailure)> = Vec::new();
    for handle in handles {
        let (index, resume_id, outcome) = handle.await.expect("batch task panicked");
        match outcome {
            Ok(result) => ranked.push((index, BatchItem { resume_id, result })),
            Err(err) => {
                warn!(%resume_id, error = %err, "batch item failed");
                failures.push((
                    index,
                    BatchFailure {
                        resume_id,
                        error: err.to_string(),
                    },
                ));
            }
        }
    }

    // Score descending; the submission index settles equal scores.
    ranked.sort_by(|(ia, a), (ib, b)| {
        b.result
            .similarity
            .score
            .partial_cmp(&a.result.similarity.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| ia.cmp(ib))
    });
    failures.sort_by_key(|(index, _)| *index);

    let ranked: Vec<BatchItem> = ranked.into_iter().map(|(_, item)| item).collect();
    let failures: Vec<BatchFailure> = failures.into_iter().map(|(_, f)| f).collect();
    let stats = compute_stats(&ranked, failures.len());

    info!(
        analyzed = stats.analyzed,
        failed = stats.failed,
        mean = stats.mean,
        "batch complete"
    );

    BatchSummary {
        ranked,
        failures,
        stats,
    }
}

fn compute_stats(ranked: &[BatchItem], failed: usize) -> BatchStats {
    if ranked.is_empty() {
        return BatchStats {
            failed,
            ..BatchStats::default()
        };
    }

    let scores: Vec<f64> = ranked.iter().map(|i| i.result.similarity.score).collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;

    // Ranked is already score-descending.
    BatchStats {
        analyzed: ranked.len(),
        failed,
        mean,
        best: scores[0],
        worst: *scores.last().expect("nonempty"),
        best_resume_id: Some(ranked[0].resume_id.clone()),
    }
}
