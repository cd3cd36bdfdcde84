use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::tokens::{ExerciseTokens, TokenExtractor};

/// `#1-3 : jbes V1`
static RANGE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:-\d+)?\s*:").expect("Invalid sub-detail label regex"));
/// `#1 (25 traction BD / 25 NC)`
static NUMBERED_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*\(").expect("Invalid sub-detail note regex"));
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("Invalid leading number regex"));

/// Interpretation of a `#`-prefixed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubDetail {
    /// Form A: a distance breakdown of the parent exercise, e.g. `#50 Educ`.
    Refinement {
        text: String,
        tokens: ExerciseTokens,
    },
    /// Form B: a free-standing note, e.g. `#1-3 : jbes V1`.
    Annotation(String),
}

/// Resolves the content of a `#` line (leading `#`s already removed or not).
pub fn parse_sub_detail(extractor: &TokenExtractor, content: &str) -> SubDetail {
    let content = content.trim_start_matches('#').trim();

    if RANGE_LABEL.is_match(content) || NUMBERED_NOTE.is_match(content) {
        return SubDetail::Annotation(content.to_string());
    }

    if let Some(caps) = LEADING_NUMBER.captures(content) {
        let mut tokens = extractor.extract(content);
        tokens.distance = caps[1].parse().ok();
        return SubDetail::Refinement {
            text: content.to_string(),
            tokens,
        };
    }

    SubDetail::Annotation(content.to_string())
}
