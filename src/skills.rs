//! Skill and keyword extraction, plus the gap computation.
//!
//! The primary path matches a curated alias catalog against the token
//! stream: case-insensitive, token-boundary exact, longest alias first so
//! "machine learning" beats "learning". A fallback strips version suffixes
//! ("python3", "java11") back onto catalog terms. Matches dedupe by
//! canonical name and bucket into the catalog-declared primary category.
//!
//! [`compute_gap`] is the only matching/missing computation in the crate.
//! Both the single-document pipeline and the batch renderer consume its
//! output; do not add a second path.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{GapReport, SkillCategory, SkillMention};
use crate::normalize::{tokenize, NormalizedText};

struct SkillDef {
    canonical: &'static str,
    category: SkillCategory,
    aliases: &'static [&'static str],
}

/// Curated skill catalog, v1. The first listed category is the primary
/// one; cloud/container tooling is Cloud even where it is also a tool.
static CATALOG: &[SkillDef] = &[
    // Cloud / container tooling
    SkillDef { canonical: "aws", category: SkillCategory::Cloud, aliases: &["aws", "amazon web services"] },
    SkillDef { canonical: "azure", category: SkillCategory::Cloud, aliases: &["azure"] },
    SkillDef { canonical: "gcp", category: SkillCategory::Cloud, aliases: &["gcp", "google cloud", "google cloud platform"] },
    SkillDef { canonical: "docker", category: SkillCategory::Cloud, aliases: &["docker"] },
    SkillDef { canonical: "kubernetes", category: SkillCategory::Cloud, aliases: &["kubernetes", "k8s"] },
    SkillDef { canonical: "terraform", category: SkillCategory::Cloud, aliases: &["terraform"] },
    SkillDef { canonical: "ansible", category: SkillCategory::Cloud, aliases: &["ansible"] },
    // Languages
    SkillDef { canonical: "python", category: SkillCategory::Language, aliases: &["python"] },
    SkillDef { canonical: "java", category: SkillCategory::Language, aliases: &["java"] },
    SkillDef { canonical: "javascript", category: SkillCategory::Language, aliases: &["javascript", "js"] },
    SkillDef { canonical: "typescript", category: SkillCategory::Language, aliases: &["typescript", "ts"] },
    SkillDef { canonical: "c++", category: SkillCategory::Language, aliases: &["c++", "cpp"] },
    SkillDef { canonical: "c#", category: SkillCategory::Language, aliases: &["c#", "csharp"] },
    SkillDef { canonical: "go", category: SkillCategory::Language, aliases: &["golang", "go"] },
    SkillDef { canonical: "rust", category: SkillCategory::Language, aliases: &["rust"] },
    SkillDef { canonical: "php", category: SkillCategory::Language, aliases: &["php"] },
    SkillDef { canonical: "ruby", category: SkillCategory::Language, aliases: &["ruby"] },
    SkillDef { canonical: "swift", category: SkillCategory::Language, aliases: &["swift"] },
    SkillDef { canonical: "kotlin", category: SkillCategory::Language, aliases: &["kotlin"] },
    SkillDef { canonical: "scala", category: SkillCategory::Language, aliases: &["scala"] },
    SkillDef { canonical: "sql", category: SkillCategory::Language, aliases: &["sql"] },
    SkillDef { canonical: "html", category: SkillCategory::Language, aliases: &["html"] },
    SkillDef { canonical: "css", category: SkillCategory::Language, aliases: &["css"] },
    // Frameworks / libraries
    SkillDef { canonical: "react", category: SkillCategory::Framework, aliases: &["react", "react.js", "reactjs"] },
    SkillDef { canonical: "angular", category: SkillCategory::Framework, aliases: &["angular"] },
    SkillDef { canonical: "vue", category: SkillCategory::Framework, aliases: &["vue", "vue.js", "vuejs"] },
    SkillDef { canonical: "django", category: SkillCategory::Framework, aliases: &["django"] },
    SkillDef { canonical: "flask", category: SkillCategory::Framework, aliases: &["flask"] },
    SkillDef { canonical: "spring", category: SkillCategory::Framework, aliases: &["spring", "spring boot"] },
    SkillDef { canonical: "node.js", category: SkillCategory::Framework, aliases: &["node.js", "nodejs", "node"] },
    SkillDef { canonical: "express", category: SkillCategory::Framework, aliases: &["express", "express.js"] },
    SkillDef { canonical: "rails", category: SkillCategory::Framework, aliases: &["rails", "ruby on rails"] },
    SkillDef { canonical: "laravel", category: SkillCategory::Framework, aliases: &["laravel"] },
    SkillDef { canonical: "tensorflow", category: SkillCategory::Framework, aliases: &["tensorflow"] },
    SkillDef { canonical: "pytorch", category: SkillCategory::Framework, aliases: &["pytorch"] },
    SkillDef { canonical: "scikit-learn", category: SkillCategory::Framework, aliases: &["scikit-learn", "scikit learn", "sklearn"] },
    SkillDef { canonical: "pandas", category: SkillCategory::Framework, aliases: &["pandas"] },
    SkillDef { canonical: "numpy", category: SkillCategory::Framework, aliases: &["numpy"] },
    // Tools / infrastructure
    SkillDef { canonical: "git", category: SkillCategory::Tool, aliases: &["git"] },
    SkillDef { canonical: "github actions", category: SkillCategory::Tool, aliases: &["github actions"] },
    SkillDef { canonical: "jenkins", category: SkillCategory::Tool, aliases: &["jenkins"] },
    SkillDef { canonical: "circleci", category: SkillCategory::Tool, aliases: &["circleci", "circle ci"] },
    SkillDef { canonical: "jira", category: SkillCategory::Tool, aliases: &["jira"] },
    SkillDef { canonical: "linux", category: SkillCategory::Tool, aliases: &["linux"] },
    SkillDef { canonical: "graphql", category: SkillCategory::Tool, aliases: &["graphql"] },
    SkillDef { canonical: "rest", category: SkillCategory::Tool, aliases: &["rest", "rest api", "rest apis", "restful"] },
    SkillDef { canonical: "postgresql", category: SkillCategory::Tool, aliases: &["postgresql", "postgres"] },
    SkillDef { canonical: "mysql", category: SkillCategory::Tool, aliases: &["mysql"] },
    SkillDef { canonical: "mongodb", category: SkillCategory::Tool, aliases: &["mongodb", "mongo"] },
    SkillDef { canonical: "redis", category: SkillCategory::Tool, aliases: &["redis"] },
    SkillDef { canonical: "kafka", category: SkillCategory::Tool, aliases: &["kafka"] },
    SkillDef { canonical: "spark", category: SkillCategory::Tool, aliases: &["spark"] },
    SkillDef { canonical: "hadoop", category: SkillCategory::Tool, aliases: &["hadoop"] },
    // Concepts / methodologies
    SkillDef { canonical: "machine learning", category: SkillCategory::Concept, aliases: &["machine learning", "ml"] },
    SkillDef { canonical: "deep learning", category: SkillCategory::Concept, aliases: &["deep learning"] },
    SkillDef { canonical: "nlp", category: SkillCategory::Concept, aliases: &["nlp", "natural language processing"] },
    SkillDef { canonical: "agile", category: SkillCategory::Concept, aliases: &["agile"] },
    SkillDef { canonical: "scrum", category: SkillCategory::Concept, aliases: &["scrum"] },
    SkillDef { canonical: "tdd", category: SkillCategory::Concept, aliases: &["tdd", "test driven development"] },
    SkillDef { canonical: "devops", category: SkillCategory::Concept, aliases: &["devops"] },
    SkillDef { canonical: "microservices", category: SkillCategory::Concept, aliases: &["microservices", "microservice"] },
    SkillDef { canonical: "ci/cd", category: SkillCategory::Concept, aliases: &["ci/cd", "continuous integration", "continuous delivery"] },
];

/// Alias lookup keyed by first token, candidates sorted longest-first.
/// Built once at process start; immutable afterwards.
static ALIAS_INDEX: LazyLock<HashMap<String, Vec<(Vec<String>, usize)>>> = LazyLock::new(|| {
    let mut index: HashMap<String, Vec<(Vec<String>, usize)>> = HashMap::new();
    for (def_idx, def) in CATALOG.iter().enumerate() {
        for alias in def.aliases {
            let alias_tokens = tokenize(alias);
            debug_assert!(!alias_tokens.is_empty(), "unreachable alias: {alias}");
            index
                .entry(alias_tokens[0].clone())
                .or_default()
                .push((alias_tokens, def_idx));
        }
    }
    for candidates in index.values_mut() {
        candidates.sort_by(|a, b| {
            b.0.len()
                .cmp(&a.0.len())
                .then_with(|| b.0.join(" ").len().cmp(&a.0.join(" ").len()))
        });
    }
    index
});

/// Trailing version suffix on a single token, e.g. `python3`, `java11`.
static VERSIONED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z][a-z+#.]*?)\d+(?:\.\d+)*$").unwrap());

/// Extract the deduplicated, canonically-named skill set from normalized
/// text. Output is sorted by canonical name for determinism.
pub fn extract(normalized: &NormalizedText) -> Vec<SkillMention> {
    let tokens = &normalized.tokens;
    let mut found: BTreeMap<&'static str, (SkillCategory, BTreeSet<String>)> = BTreeMap::new();

    let mut i = 0;
    while i < tokens.len() {
        if let Some((alias_tokens, def_idx)) = match_at(tokens, i) {
            let def = &CATALOG[def_idx];
            let alias = alias_tokens.join(" ");
            found
                .entry(def.canonical)
                .or_insert_with(|| (def.category, BTreeSet::new()))
                .1
                .insert(alias);
            i += alias_tokens.len();
            continue;
        }

        // Fallback: versioned token whose base term is in the catalog.
        if let Some(caps) = VERSIONED_RE.captures(&tokens[i]) {
            let base = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            if let Some((alias_tokens, def_idx)) = match_single(base) {
                let def = &CATALOG[def_idx];
                found
                    .entry(def.canonical)
                    .or_insert_with(|| (def.category, BTreeSet::new()))
                    .1
                    .insert(alias_tokens.join(" "));
            }
        }
        i += 1;
    }

    found
        .into_iter()
        .map(|(canonical, (category, aliases))| SkillMention {
            canonical: canonical.to_string(),
            category,
            aliases: aliases.into_iter().collect(),
        })
        .collect()
}

/// Longest alias starting at token position `i`, if any.
fn match_at(tokens: &[String], i: usize) -> Option<(&'static Vec<String>, usize)> {
    let candidates = ALIAS_INDEX.get(tokens[i].as_str())?;
    // Candidates are longest-first, so the first hit wins.
    candidates
        .iter()
        .find(|(alias_tokens, _)| {
            alias_tokens.len() <= tokens.len() - i
                && alias_tokens
                    .iter()
                    .zip(&tokens[i..i + alias_tokens.len()])
                    .all(|(a, t)| a == t)
        })
        .map(|(alias_tokens, def_idx)| (alias_tokens, *def_idx))
}

/// Exact single-token alias lookup, used by the version-suffix fallback.
fn match_single(token: &str) -> Option<(&'static Vec<String>, usize)> {
    ALIAS_INDEX
        .get(token)?
        .iter()
        .find(|(alias_tokens, _)| alias_tokens.len() == 1)
        .map(|(alias_tokens, def_idx)| (alias_tokens, *def_idx))
}

/// The single gap-computation path: partition the job description's skill
/// set into skills the resume has and skills it lacks.
///
/// Invariants: `matching ∩ missing = ∅`; both are subsets of `job`.
pub fn compute_gap(resume: &[SkillMention], job: &[SkillMention]) -> GapReport {
    let resume_names: BTreeSet<&str> = resume.iter().map(|s| s.canonical.as_str()).collect();

    let mut matching = Vec::new();
    let mut missing = Vec::new();
    for skill in job {
        if resume_names.contains(skill.canonical.as_str()) {
            matching.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    GapReport { matching, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn skills_of(text: &str) -> Vec<SkillMention> {
        extract(&normalize(text).unwrap())
    }

    fn names(skills: &[SkillMention]) -> Vec<&str> {
        skills.iter().map(|s| s.canonical.as_str()).collect()
    }

    #[test]
    fn test_basic_extraction() {
        let skills = skills_of("Built REST APIs using Python and Docker");
        let names = names(&skills);
        assert!(names.contains(&"python"));
        assert!(names.contains(&"docker"));
        assert!(names.contains(&"rest"));
    }

    #[test]
    fn test_alias_resolution() {
        let skills = skills_of("k8s deployments on GCP");
        let names = names(&skills);
        assert!(names.contains(&"kubernetes"));
        assert!(names.contains(&"gcp"));
    }

    #[test]
    fn test_aliases_dedupe_to_one_canonical() {
        let skills = skills_of("kubernetes and k8s and Kubernetes");
        let kube: Vec<_> = skills.iter().filter(|s| s.canonical == "kubernetes").collect();
        assert_eq!(kube.len(), 1);
        assert_eq!(kube[0].aliases, vec!["k8s", "kubernetes"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let skills = skills_of("applied machine learning daily");
        let names = names(&skills);
        assert!(names.contains(&"machine learning"));
        // "learning" alone never matches anything.
        assert!(!names.contains(&"learning"));
    }

    #[test]
    fn test_multiword_alias_consumes_tokens() {
        // "google cloud platform" resolves to gcp once, not gcp + others.
        let skills = skills_of("deployed to Google Cloud Platform");
        assert_eq!(names(&skills), vec!["gcp"]);
    }

    #[test]
    fn test_cloud_categorization() {
        for text in ["docker", "kubernetes", "aws", "gcp", "azure"] {
            let skills = skills_of(text);
            assert_eq!(skills[0].category, SkillCategory::Cloud, "{text}");
        }
    }

    #[test]
    fn test_punctuation_joined_skills() {
        let skills = skills_of("C++ and C# with Node.js");
        let names = names(&skills);
        assert!(names.contains(&"c++"));
        assert!(names.contains(&"c#"));
        assert!(names.contains(&"node.js"));
    }

    #[test]
    fn test_versioned_fallback() {
        let skills = skills_of("shipped python3 services on java11");
        let names = names(&skills);
        assert!(names.contains(&"python"));
        assert!(names.contains(&"java"));
    }

    #[test]
    fn test_output_sorted_and_deterministic() {
        let a = skills_of("rust python docker aws");
        let b = skills_of("rust python docker aws");
        assert_eq!(a, b);
        let mut sorted = names(&a);
        sorted.sort_unstable();
        assert_eq!(names(&a), sorted);
    }

    #[test]
    fn test_gap_partition() {
        let resume = skills_of("Built REST APIs using Python and Docker");
        let job = skills_of("Looking for Python, Docker, Kubernetes");
        let gap = compute_gap(&resume, &job);

        assert_eq!(names(&gap.matching), vec!["docker", "python"]);
        assert_eq!(names(&gap.missing), vec!["kubernetes"]);
    }

    #[test]
    fn test_gap_invariants() {
        let resume = skills_of("rust tokio");
        let job = skills_of("rust python kubernetes");
        let gap = compute_gap(&resume, &job);

        let matching: std::collections::BTreeSet<_> = names(&gap.matching).into_iter().collect();
        let missing: std::collections::BTreeSet<_> = names(&gap.missing).into_iter().collect();
        assert!(matching.is_disjoint(&missing));

        let mut union: Vec<_> = matching.union(&missing).copied().collect();
        union.sort_unstable();
        assert_eq!(union, names(&job));
    }

    #[test]
    fn test_gap_empty_resume() {
        let job = skills_of("python kubernetes");
        let gap = compute_gap(&[], &job);
        assert!(gap.matching.is_empty());
        assert_eq!(gap.missing.len(), 2);
    }
}
