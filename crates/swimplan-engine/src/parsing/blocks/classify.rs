use std::sync::LazyLock;

use regex::Regex;

static BLOCK_REP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^x\d+").expect("Invalid block repetition regex"));
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[SB]\d+\s*:").expect("Invalid annotation regex"));
static TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^total\s*:").expect("Invalid total regex"));

/// Role of a single plan line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Blank after trimming; separates raw blocks.
    Empty,
    /// `x3`, `x2 (4x50 + 100)`: repetition count for the whole block.
    BlockRep,
    /// Digit-leading line such as `4x50 Cr V2 r:20''`.
    Exercise,
    /// `#`-prefixed refinement of the previous exercise.
    SubDetail,
    /// `+`-prefixed follow-up line.
    Continuation,
    /// Labelled note such as `S1 : ...` or `B2 : ...`.
    Annotation,
    /// Anything else, including `Total : ...` summaries.
    Unparsed,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub line_type: LineType,
    pub raw: String,
    pub trimmed: String,
}

impl ClassifiedLine {
    /// Whether this is a `Total : ...` summary line, which carries no plan content.
    pub fn is_total_marker(&self) -> bool {
        self.line_type == LineType::Unparsed && TOTAL.is_match(&self.trimmed)
    }
}

/// Classifies a line with ordered, mutually exclusive rules; first match wins.
pub fn classify_line(raw: &str) -> ClassifiedLine {
    let trimmed = raw.trim();

    let line_type = if trimmed.is_empty() {
        LineType::Empty
    } else if BLOCK_REP.is_match(trimmed) {
        LineType::BlockRep
    } else if trimmed.starts_with('#') {
        LineType::SubDetail
    } else if trimmed.starts_with('+') {
        LineType::Continuation
    } else if ANNOTATION.is_match(trimmed) {
        LineType::Annotation
    } else if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        LineType::Exercise
    } else {
        LineType::Unparsed
    };

    ClassifiedLine {
        line_type,
        raw: raw.to_string(),
        trimmed: trimmed.to_string(),
    }
}
