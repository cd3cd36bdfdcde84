pub mod blocks;
pub mod normalizer;
pub mod snapshot;
pub mod tokens;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use log::{debug, trace};

use crate::models::SwimBlock;

use blocks::{BlockAssembler, classify_line, merge_standalone_repetitions, split_into_raw_blocks};
use normalizer::normalize_text;
use tokens::TokenExtractor;

pub use tokens::{ExerciseTokens, parse_exercise_tokens};

static DEFAULT_PARSER: LazyLock<SwimParser> = LazyLock::new(SwimParser::default);

/// Knobs for a [`SwimParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Prefix of the numbered title given to blocks without one (`"Bloc 2"`).
    pub block_title_prefix: String,
    /// Modality tokens recognised on top of the built-in ones.
    pub extra_modality_tokens: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            block_title_prefix: "Bloc".to_string(),
            extra_modality_tokens: Vec::new(),
        }
    }
}

/// Compiled plan parser. Immutable once built, so one instance can be shared.
#[derive(Debug, Clone)]
pub struct SwimParser {
    options: ParseOptions,
    extractor: TokenExtractor,
}

impl SwimParser {
    pub fn new(options: ParseOptions) -> Self {
        let extractor = TokenExtractor::new(&options.extra_modality_tokens);
        Self { options, extractor }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a whole plan. Never fails: text that fits no pattern ends up in
    /// a block's title, description or modalities.
    pub fn parse(&self, text: &str) -> Vec<SwimBlock> {
        let normalized = normalize_text(text);
        let lines = normalized.split('\n').map(|raw| {
            let line = classify_line(raw);
            trace!("{:?}: {:?}", line.line_type, line.trimmed);
            line
        });

        let mut blocks = Vec::new();
        let mut number = 0usize;
        for raw in split_into_raw_blocks(lines) {
            let raw = raw.without_totals();
            if raw.is_empty() {
                debug!("skipping block holding only totals");
                continue;
            }

            number += 1;
            let title = format!("{} {number}", self.options.block_title_prefix);
            let mut assembler = BlockAssembler::new(&self.extractor, title);
            for line in &raw.lines {
                assembler.push(line);
            }
            blocks.push(assembler.finish());
        }

        merge_standalone_repetitions(blocks)
    }
}

impl Default for SwimParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Parses a plan with the default options.
pub fn parse_swim_text(text: &str) -> Vec<SwimBlock> {
    DEFAULT_PARSER.parse(text)
}
