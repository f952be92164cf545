//! The single-pair analysis pipeline.
//!
//! Wires the normalizer, segmenter, extractors, scorer, and suggestion
//! rules into one pass over a resume / job-description pair. This is the
//! computation the cache wraps and the batch layer fans out over.

use chrono::Utc;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{AnalysisResult, Document, SectionKind};
use crate::{bullets, format, normalize, score, sections, skills, suggest, verbs};

/// Analyze one resume against one job description.
///
/// Fails if either document normalizes to zero tokens or contains
/// non-text bytes; every downstream stage is total.
pub fn analyze(config: &EngineConfig, resume: &Document, job: &Document) -> Result<AnalysisResult> {
    let resume_norm = normalize::normalize(&resume.text)?;
    let job_norm = normalize::normalize(&job.text)?;
    debug!(
        resume_tokens = resume_norm.tokens.len(),
        job_tokens = job_norm.tokens.len(),
        "normalized document pair"
    );

    let section_map = sections::segment(&resume.text);

    // Bullets come from the experience section, or the unlabeled zones
    // when no experience heading was recognized.
    let bullet_source = if section_map.has(SectionKind::Experience) {
        section_map.text_for(SectionKind::Experience)
    } else {
        section_map.text_for(SectionKind::Other)
    };
    let bullet_texts = bullets::extract(&bullet_source);
    let (_classified, verb_summary) = verbs::analyze(&bullet_texts);

    let resume_skills = skills::extract(&resume_norm);
    let job_skills = skills::extract(&job_norm);
    let gap = skills::compute_gap(&resume_skills, &job_skills);

    let similarity = score::similarity(&resume_norm, &job_norm, config.scoring.top_terms);
    let format_report = format::assess(&resume.text, &section_map);

    let feedback = suggest::feedback(similarity.percentage()).to_string();
    let suggestions = suggest::generate(
        &config.suggestions,
        &gap,
        &verb_summary,
        &format_report,
        &section_map,
    );

    info!(
        resume_id = %resume.id,
        score = similarity.score,
        matching = gap.matching.len(),
        missing = gap.missing.len(),
        suggestions = suggestions.len(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        resume_id: resume.id.clone(),
        similarity,
        gap,
        verbs: verb_summary,
        format: format_report,
        feedback,
        suggestions,
        analyzed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzeError;
    use crate::models::{DocumentRole, SuggestionKind};

    fn doc(role: DocumentRole, text: &str) -> Document {
        Document::new(role, text)
    }

    #[test]
    fn test_end_to_end_pair() {
        let resume = doc(
            DocumentRole::Resume,
            "Experience\n- Built REST APIs using Python and Docker",
        );
        let job = doc(
            DocumentRole::JobDescription,
            "Looking for a candidate skilled in Python, Docker, Kubernetes",
        );
        let result = analyze(&EngineConfig::default(), &resume, &job).unwrap();

        let matching: Vec<&str> = result
            .gap
            .matching
            .iter()
            .map(|s| s.canonical.as_str())
            .collect();
        let missing: Vec<&str> = result
            .gap
            .missing
            .iter()
            .map(|s| s.canonical.as_str())
            .collect();
        assert_eq!(matching, vec!["docker", "python"]);
        assert_eq!(missing, vec!["kubernetes"]);
        assert!(result.similarity.score > 0.0);
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::SkillGap && s.text.contains("kubernetes")));
    }

    #[test]
    fn test_empty_resume_fails() {
        let resume = doc(DocumentRole::Resume, "   \n\t ");
        let job = doc(DocumentRole::JobDescription, "python");
        let err = analyze(&EngineConfig::default(), &resume, &job).unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyDocument));
    }

    #[test]
    fn test_bullets_fall_back_to_unlabeled_text() {
        let resume = doc(
            DocumentRole::Resume,
            "- Helped improve deployment process\n- Led the migration",
        );
        let job = doc(DocumentRole::JobDescription, "deployment engineer");
        let result = analyze(&EngineConfig::default(), &resume, &job).unwrap();
        assert_eq!(result.verbs.total, 2);
        assert_eq!(result.verbs.weak, 1);
        assert_eq!(result.verbs.weak_findings[0].verb, "helped");
    }

    #[test]
    fn test_result_carries_resume_id() {
        let resume = Document::with_id("r-42", DocumentRole::Resume, "python engineer resume");
        let job = doc(DocumentRole::JobDescription, "python engineer");
        let result = analyze(&EngineConfig::default(), &resume, &job).unwrap();
        assert_eq!(result.resume_id, "r-42");
    }
}
