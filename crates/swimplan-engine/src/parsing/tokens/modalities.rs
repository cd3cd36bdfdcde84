//! Free-text annotations that have no structured field of their own.

use std::sync::LazyLock;

use regex::Regex;

/// Modality tokens recognised out of the box.
pub const DEFAULT_MODALITY_TOKENS: &[&str] = &[
    "W", "DP", "CB", "R2N", "D2B", "ampli", "AC", "CP", "RA", "1/2 pull", "focus",
];

pub const MODALITY_SEPARATOR: &str = " / ";

static W_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bW\s+[^/()\n]+").expect("Invalid W segment regex"));
static MATERIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmat\.\s*[^\s/()]+").expect("Invalid material regex"));
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("Invalid parenthesis regex"));
static BREATHING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\brespi\s*\d+(?:\s*temps)?").expect("Invalid breathing regex")
});

/// A configured modality token and its compiled pattern.
#[derive(Debug, Clone)]
pub struct ModalityToken {
    pub label: String,
    pattern: Regex,
}

impl ModalityToken {
    /// Compiles a token. Word boundaries are added on the sides where the
    /// token starts or ends with a word character; inner spaces match any
    /// run of whitespace. Single-character tokens match case-sensitively,
    /// longer ones ignore case.
    pub fn new(label: &str) -> Option<Self> {
        let label = label.trim();
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        let first = label.chars().next()?;
        let last = label.chars().last()?;

        let body = label
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");
        let pattern = format!(
            "{}{}{}{}",
            if label.chars().count() > 1 { "(?i)" } else { "" },
            if is_word(first) { r"\b" } else { "" },
            body,
            if is_word(last) { r"\b" } else { "" },
        );

        match Regex::new(&pattern) {
            Ok(pattern) => Some(Self {
                label: label.to_string(),
                pattern,
            }),
            Err(e) => {
                log::warn!("Ignoring modality token {label:?}: {e}");
                None
            }
        }
    }

    fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}

/// Collects the modality segments of one line.
///
/// `text` is the accented line with rest/departure groups removed;
/// `original` is the untouched line, used for parenthesized notes.
pub fn extract_modalities(text: &str, original: &str, tokens: &[ModalityToken]) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(m) = W_SEGMENT.find(text) {
        push_segment(&mut parts, m.as_str());
    }

    if let Some(m) = MATERIAL.find(text) {
        push_segment(&mut parts, m.as_str());
    }

    for token in tokens {
        if let Some(found) = token.find(text)
            && !already_captured(&parts, found)
        {
            parts.push(found.to_string());
        }
    }

    for caps in PARENTHESIZED.captures_iter(original) {
        let inner = caps.get(1).map_or("", |m| m.as_str()).trim();
        if inner.chars().count() > 2 && !already_captured(&parts, inner) {
            parts.push(inner.to_string());
        }
    }

    if let Some(m) = BREATHING.find(text) {
        push_segment(&mut parts, m.as_str());
    }

    parts.join(MODALITY_SEPARATOR)
}

fn push_segment(parts: &mut Vec<String>, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() && !already_captured(parts, segment) {
        parts.push(segment.to_string());
    }
}

fn already_captured(parts: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    parts.iter().any(|part| part.to_lowercase().contains(&needle))
}

/// Appends `addition` to an existing modality string with `separator`.
pub fn append_modality(modalities: &mut String, addition: &str, separator: &str) {
    let addition = addition.trim();
    if addition.is_empty() {
        return;
    }
    if !modalities.is_empty() {
        modalities.push_str(separator);
    }
    modalities.push_str(addition);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_tokens() -> Vec<ModalityToken> {
        DEFAULT_MODALITY_TOKENS
            .iter()
            .filter_map(|t| ModalityToken::new(t))
            .collect()
    }

    fn modalities(text: &str) -> String {
        extract_modalities(text, text, &default_tokens())
    }

    #[test]
    fn w_segment_stops_at_slash() {
        assert_eq!(modalities("4x50 W 25 vite / 25 lent"), "W 25 vite");
    }

    #[test]
    fn configured_tokens_in_table_order() {
        assert_eq!(modalities("4x50 CB R2N"), "CB / R2N");
    }

    #[test]
    fn half_pull_token() {
        assert_eq!(modalities("200 1/2 pull"), "1/2 pull");
    }

    #[test]
    fn material_and_breathing() {
        assert_eq!(
            modalities("400 mat. planche respi 3 temps"),
            "mat. planche / respi 3 temps"
        );
    }

    #[test]
    fn parenthesized_note_from_original_text() {
        let original = "4x50 (coulée max) r:15''";
        let cleaned = "4x50 (coulée max)  ";
        assert_eq!(
            extract_modalities(cleaned, original, &default_tokens()),
            "coulée max"
        );
    }

    #[test]
    fn short_parenthesized_content_is_ignored() {
        assert_eq!(modalities("4x50 (x2)"), "");
    }

    #[test]
    fn parenthesized_w_segment_is_not_repeated() {
        assert_eq!(modalities("4x50 (W 25 vite)"), "W 25 vite");
    }

    #[test]
    fn ampli_is_case_insensitive() {
        assert_eq!(modalities("8x50 Ampli"), "Ampli");
    }

    #[test]
    fn single_letter_token_is_case_sensitive() {
        assert_eq!(modalities("100 w tempo"), "");
        assert_eq!(modalities("100 dos W"), "W");
        let token = ModalityToken::new("W").unwrap();
        assert_eq!(token.find("4x50 w"), None);
    }

    #[test]
    fn token_with_trailing_symbol_compiles() {
        let token = ModalityToken::new("tempo+").unwrap();
        assert_eq!(token.find("100 tempo+ V2"), Some("tempo+"));
        assert!(ModalityToken::new("   ").is_none());
    }

    #[test]
    fn append_modality_separates_existing_content() {
        let mut modalities = String::new();
        append_modality(&mut modalities, "CB", MODALITY_SEPARATOR);
        append_modality(&mut modalities, "  ", MODALITY_SEPARATOR);
        append_modality(&mut modalities, "25 educ", "\n");
        assert_eq!(modalities, "CB\n25 educ");
    }
}
