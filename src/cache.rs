//! Digest-keyed analysis cache with single-flight computation.
//!
//! The key is the (resume digest, job-description digest) pair, so two
//! uploads with the same normalized content share one entry regardless
//! of formatting. Concurrency is per key: each entry owns its own
//! once-cell, and the map lock is held only long enough to fetch or
//! insert the cell. Identical concurrent requests therefore trigger at
//! most one computation and all callers share the same result. A failed
//! computation leaves the cell empty so a later request can retry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;
use tracing::debug;

use crate::analyze;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{AnalysisResult, Document};

type Key = (String, String);
type Cell = Arc<OnceCell<Arc<AnalysisResult>>>;

#[derive(Default)]
pub struct AnalysisCache {
    cells: Mutex<HashMap<Key, Cell>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze the pair, or return the cached result for its digest pair.
    pub async fn get_or_analyze(
        &self,
        config: &EngineConfig,
        resume: &Document,
        job: &Document,
    ) -> Result<Arc<AnalysisResult>> {
        let key = (resume.digest.clone(), job.digest.clone());
        self.get_or_compute(key, || analyze::analyze(config, resume, job))
            .await
    }

    /// Single-flight lookup: run `compute` only if no cached value exists
    /// for the key, with concurrent callers for the same key waiting on
    /// the in-flight computation instead of starting their own.
    pub async fn get_or_compute<F>(&self, key: Key, compute: F) -> Result<Arc<AnalysisResult>>
    where
        F: FnOnce() -> Result<AnalysisResult>,
    {
        let cell = {
            let mut cells = self.cells.lock().expect("cache lock poisoned");
            Arc::clone(cells.entry(key.clone()).or_default())
        };

        if let Some(cached) = cell.get() {
            debug!(resume_digest = %key.0, "cache hit");
            return Ok(Arc::clone(cached));
        }

        let result = cell
            .get_or_try_init(|| async { compute().map(Arc::new) })
            .await?;
        Ok(Arc::clone(result))
    }

    /// Number of completed entries.
    pub fn len(&self) -> usize {
        self.cells
            .lock()
            .expect("cache lock poisoned")
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry, completed or in flight.
    pub fn clear(&self) {
        self.cells.lock().expect("cache lock poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::AnalyzeError;
    use crate::models::DocumentRole;

    fn pair() -> (Document, Document) {
        (
            Document::new(DocumentRole::Resume, "python and docker experience"),
            Document::new(DocumentRole::JobDescription, "python docker kubernetes"),
        )
    }

    #[tokio::test]
    async fn test_hit_returns_shared_result() {
        let cache = AnalysisCache::new();
        let config = EngineConfig::default();
        let (resume, job) = pair();

        let first = cache.get_or_analyze(&config, &resume, &job).await.unwrap();
        let second = cache.get_or_analyze(&config, &resume, &job).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_digest_key_ignores_formatting() {
        let cache = AnalysisCache::new();
        let config = EngineConfig::default();
        let (_, job) = pair();
        let a = Document::new(DocumentRole::Resume, "Python  And Docker");
        let b = Document::new(DocumentRole::Resume, "python and docker");
        assert_eq!(a.digest, b.digest);

        let ra = cache.get_or_analyze(&config, &a, &job).await.unwrap();
        let rb = cache.get_or_analyze(&config, &b, &job).await.unwrap();
        assert!(Arc::ptr_eq(&ra, &rb));
    }

    #[tokio::test]
    async fn test_concurrent_requests_compute_once() {
        let cache = Arc::new(AnalysisCache::new());
        let config = EngineConfig::default();
        let (resume, job) = pair();
        let computations = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let config = config.clone();
            let resume = resume.clone();
            let job = job.clone();
            let computations = Arc::clone(&computations);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_compute((resume.digest.clone(), job.digest.clone()), || {
                        computations.fetch_add(1, Ordering::SeqCst);
                        analyze::analyze(&config, &resume, &job)
                    })
                    .await
                    .unwrap()
            }));
        }

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }
        assert_eq!(computations.load(Ordering::SeqCst), 1);
        for result in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], result));
        }
    }

    #[tokio::test]
    async fn test_distinct_keys_compute_independently() {
        let cache = AnalysisCache::new();
        let config = EngineConfig::default();
        let (resume, job) = pair();
        let other_job = Document::new(DocumentRole::JobDescription, "rust systems role");

        let a = cache.get_or_analyze(&config, &resume, &job).await.unwrap();
        let b = cache
            .get_or_analyze(&config, &resume, &other_job)
            .await
            .unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let cache = AnalysisCache::new();
        let key = ("r".to_string(), "j".to_string());

        let err = cache
            .get_or_compute(key.clone(), || Err(AnalyzeError::EmptyDocument))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyDocument));
        assert!(cache.is_empty());

        // A later request for the same key may retry and succeed.
        let config = EngineConfig::default();
        let (resume, job) = pair();
        let retried = cache
            .get_or_compute(key, || analyze::analyze(&config, &resume, &job))
            .await;
        assert!(retried.is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_resets() {
        let cache = AnalysisCache::new();
        let config = EngineConfig::default();
        let (resume, job) = pair();
        cache.get_or_analyze(&config, &resume, &job).await.unwrap();
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
