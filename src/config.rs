use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::format;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub suggestions: SuggestionConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    #[serde(default = "default_top_terms")]
    pub top_terms: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_terms: default_top_terms(),
        }
    }
}

fn default_top_terms() -> usize {
    15
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionConfig {
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            max_words: default_max_words(),
        }
    }
}

fn default_min_words() -> usize {
    format::MIN_WORDS
}
fn default_max_words() -> usize {
    format::MAX_WORDS
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BatchConfig {
    /// Concurrent analyses per batch. 0 means one per available core.
    #[serde(default)]
    pub workers: usize,
}

impl BatchConfig {
    /// Effective worker count, resolving 0 to the core count.
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: EngineConfig =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.scoring.top_terms == 0 {
        anyhow::bail!("scoring.top_terms must be > 0");
    }

    if config.suggestions.min_words >= config.suggestions.max_words {
        anyhow::bail!("suggestions.min_words must be < suggestions.max_words");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_from_empty_file() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.scoring.top_terms, 15);
        assert_eq!(config.suggestions.min_words, 200);
        assert_eq!(config.suggestions.max_words, 1500);
        assert!(config.batch.effective_workers() >= 1);
    }

    #[test]
    fn test_partial_override() {
        let file = write_config("[scoring]\ntop_terms = 5\n\n[batch]\nworkers = 2\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.scoring.top_terms, 5);
        assert_eq!(config.batch.effective_workers(), 2);
        assert_eq!(config.suggestions.min_words, 200);
    }

    #[test]
    fn test_zero_top_terms_rejected() {
        let file = write_config("[scoring]\ntop_terms = 0\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_inverted_word_bounds_rejected() {
        let file = write_config("[suggestions]\nmin_words = 2000\nmax_words = 100\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/engine.toml")).is_err());
    }
}
