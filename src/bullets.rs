//! Bullet-point extraction from section text.
//!
//! Recognizes the common marker conventions (unicode glyphs, dashes,
//! asterisks, numbered and lettered enumerators) and merges continuation
//! lines into the preceding bullet. Encounter order is preserved and
//! empty markers are dropped.

use std::sync::LazyLock;

use regex::Regex;

/// Glyph, dash, asterisk, or plus marker, optionally indented.
static GLYPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\u{2022}\u{00B7}\u{2023}\u{2043}\u{25E6}\u{25CB}\u{25CF}\u{25C6}\u{25AA}\u{25AB}\u{25B6}\u{25BA}\u{2192}\u{2713}*+-]\s+(.*)$").unwrap());

/// `1.` / `12)` / `a)` style enumerators.
static ENUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:\d{1,2}[.)]|[a-zA-Z]\))\s+(.*)$").unwrap());

/// Extract bullet texts from a section's lines, in document order.
pub fn extract(section_text: &str) -> Vec<String> {
    let mut bullets: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in section_text.lines() {
        let stripped = line.trim();

        // A blank line closes the open bullet.
        if stripped.is_empty() {
            flush(&mut current, &mut bullets);
            continue;
        }

        if let Some(rest) = marker_text(line) {
            flush(&mut current, &mut bullets);
            let rest = rest.trim();
            if !rest.is_empty() {
                current = Some(rest.to_string());
            }
            continue;
        }

        // Continuation: unmarked line while a bullet is open.
        match current.as_mut() {
            Some(buf) => {
                buf.push(' ');
                buf.push_str(stripped);
            }
            None => {} // prose between lists, not part of any bullet
        }
    }

    flush(&mut current, &mut bullets);
    bullets
}

fn flush(current: &mut Option<String>, bullets: &mut Vec<String>) {
    if let Some(text) = current.take() {
        let text = text.trim().to_string();
        if !text.is_empty() {
            bullets.push(text);
        }
    }
}

/// Return the text after a bullet marker, or `None` for unmarked lines.
fn marker_text(line: &str) -> Option<&str> {
    if let Some(caps) = GLYPH_RE.captures(line) {
        return caps.get(1).map(|m| m.as_str());
    }
    ENUM_RE.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}
