//! Leading-verb strength classification for experience bullets.
//!
//! Multi-word weak phrases ("worked on", "was responsible for") are
//! checked before the single leading word so they classify as a unit.
//! The lexicons are versioned data tables like the stop-word list.

use crate::models::{Bullet, VerbStrength, VerbSummary, WeakVerbFinding};

/// Action verbs considered strong. Sorted for binary search.
static STRONG_VERBS: &[&str] = &[
    "accelerated",
    "achieved",
    "architected",
    "automated",
    "built",
    "championed",
    "created",
    "delivered",
    "designed",
    "developed",
    "directed",
    "drove",
    "engineered",
    "established",
    "expanded",
    "founded",
    "implemented",
    "improved",
    "increased",
    "initiated",
    "launched",
    "led",
    "managed",
    "mentored",
    "modernized",
    "optimized",
    "orchestrated",
    "overhauled",
    "pioneered",
    "redesigned",
    "reduced",
    "refactored",
    "resolved",
    "scaled",
    "shipped",
    "spearheaded",
    "streamlined",
    "transformed",
];

/// Single weak leading verbs. Sorted for binary search.
static WEAK_VERBS: &[&str] = &[
    "assisted",
    "coded",
    "did",
    "handled",
    "helped",
    "made",
    "participated",
    "supported",
    "tried",
    "used",
    "utilized",
    "worked",
];

/// Weak multi-word openers, matched before the single-word check.
static WEAK_PHRASES: &[&str] = &[
    "assisted with",
    "helped with",
    "involved in",
    "responsible for",
    "took part in",
    "was responsible for",
    "worked on",
];

/// Suggested substitutions for weak verbs and phrases. Sorted by key.
static REPLACEMENTS: &[(&str, &str)] = &[
    ("assisted", "facilitated"),
    ("assisted with", "facilitated"),
    ("coded", "engineered"),
    ("did", "executed"),
    ("handled", "managed"),
    ("helped", "spearheaded"),
    ("helped with", "spearheaded"),
    ("involved in", "drove"),
    ("made", "created"),
    ("participated", "contributed to"),
    ("responsible for", "owned"),
    ("supported", "drove"),
    ("took part in", "led"),
    ("tried", "achieved"),
    ("used", "leveraged"),
    ("utilized", "leveraged"),
    ("was responsible for", "owned"),
    ("worked", "delivered"),
    ("worked on", "developed"),
];

fn is_strong(verb: &str) -> bool {
    STRONG_VERBS.binary_search(&verb).is_ok()
}

fn is_weak(verb: &str) -> bool {
    WEAK_VERBS.binary_search(&verb).is_ok()
}

pub fn replacement_for(verb: &str) -> Option<&'static str> {
    REPLACEMENTS
        .binary_search_by_key(&verb, |(k, _)| k)
        .ok()
        .map(|i| REPLACEMENTS[i].1)
}

/// Classify one bullet by its opener.
pub fn classify(text: &str) -> Bullet {
    let lowered = text.to_lowercase();

    for phrase in WEAK_PHRASES {
        if lowered == *phrase || lowered.starts_with(&format!("{phrase} ")) {
            return Bullet {
                text: text.to_string(),
                verb: Some((*phrase).to_string()),
                strength: VerbStrength::Weak,
            };
        }
    }

    let leading: String = lowered
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();

    if leading.is_empty() {
        return Bullet {
            text: text.to_string(),
            verb: None,
            strength: VerbStrength::Unclassified,
        };
    }

    let strength = if is_strong(&leading) {
        VerbStrength::Strong
    } else if is_weak(&leading) {
        VerbStrength::Weak
    } else {
        VerbStrength::Unclassified
    };

    Bullet {
        text: text.to_string(),
        verb: Some(leading),
        strength,
    }
}

/// Classify every bullet and aggregate the counts and weak-verb findings.
pub fn analyze(bullet_texts: &[String]) -> (Vec<Bullet>, VerbSummary) {
    let bullets: Vec<Bullet> = bullet_texts.iter().map(|t| classify(t)).collect();

    let mut summary = VerbSummary {
        total: bullets.len(),
        ..VerbSummary::default()
    };
    for bullet in &bullets {
        match (&bullet.verb, bullet.strength) {
            (None, _) => summary.missing_verb += 1,
            (Some(_), VerbStrength::Strong) => summary.strong += 1,
            (Some(verb), VerbStrength::Weak) => {
                summary.weak += 1;
                summary.weak_findings.push(WeakVerbFinding {
                    bullet: bullet.text.clone(),
                    verb: verb.clone(),
                    replacement: replacement_for(verb).map(str::to_string),
                });
            }
            (Some(_), VerbStrength::Unclassified) => summary.unclassified += 1,
        }
    }

    (bullets, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_verb() {
        let b = classify("Led migration of the billing stack");
        assert_eq!(b.verb.as_deref(), Some("led"));
        assert_eq!(b.strength, VerbStrength::Strong);
    }

    #[test]
    fn test_weak_verb_with_replacement() {
        let b = classify("Helped improve deployment process");
        assert_eq!(b.verb.as_deref(), Some("helped"));
        assert_eq!(b.strength, VerbStrength::Weak);
        assert_eq!(replacement_for("helped"), Some("spearheaded"));
    }

    #[test]
    fn test_weak_phrase_beats_single_word() {
        // "worked" alone is weak, but the phrase is the classification unit.
        let b = classify("Worked on the payments service");
        assert_eq!(b.verb.as_deref(), Some("worked on"));
        assert_eq!(b.strength, VerbStrength::Weak);
        assert_eq!(replacement_for("worked on"), Some("developed"));
    }

    #[test]
    fn test_was_responsible_for() {
        let b = classify("Was responsible for the on-call rotation");
        assert_eq!(b.verb.as_deref(), Some("was responsible for"));
        assert_eq!(replacement_for("was responsible for"), Some("owned"));
    }

    #[test]
    fn test_unclassified_verb() {
        let b = classify("Collaborated across three teams");
        assert_eq!(b.verb.as_deref(), Some("collaborated"));
        assert_eq!(b.strength, VerbStrength::Unclassified);
    }

    #[test]
    fn test_missing_verb() {
        let b = classify("2019-2021: backend team");
        assert!(b.verb.is_none());
        assert_eq!(b.strength, VerbStrength::Unclassified);
    }

    #[test]
    fn test_lexicons_sorted_for_binary_search() {
        for table in [STRONG_VERBS, WEAK_VERBS, WEAK_PHRASES] {
            let mut sorted = table.to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, table);
        }
        let mut keys: Vec<_> = REPLACEMENTS.iter().map(|(k, _)| *k).collect();
        let unsorted = keys.clone();
        keys.sort_unstable();
        assert_eq!(keys, unsorted);
    }

    #[test]
    fn test_every_weak_entry_has_a_replacement() {
        for verb in WEAK_VERBS.iter().chain(WEAK_PHRASES) {
            assert!(replacement_for(verb).is_some(), "no replacement for {verb}");
        }
    }

    #[test]
    fn test_analyze_counts() {
        let bullets = vec![
            "Led the data platform".to_string(),
            "Helped with releases".to_string(),
            "Collaborated with design".to_string(),
            "2020: sabbatical".to_string(),
        ];
        let (classified, summary) = analyze(&bullets);
        assert_eq!(classified.len(), 4);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.strong, 1);
        assert_eq!(summary.weak, 1);
        assert_eq!(summary.unclassified, 1);
        assert_eq!(summary.missing_verb, 1);
        assert_eq!(summary.weak_findings.len(), 1);
        assert_eq!(summary.weak_findings[0].verb, "helped with");
    }
}
