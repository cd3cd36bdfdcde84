use std::sync::LazyLock;

use regex::Regex;

use crate::models::SwimBlock;
use crate::parsing::tokens::{
    ExerciseTokens, TokenExtractor,
    modalities::{MODALITY_SEPARATOR, append_modality},
};

use super::{
    classify::{ClassifiedLine, LineType},
    post::union_equipment,
    sub_detail::{SubDetail, parse_sub_detail},
};

static BLOCK_REP_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^x(\d+)\s*(.*)$").expect("Invalid block repetition regex"));

/// Assembles one raw block into a [`SwimBlock`], one classified line at a time.
///
/// An exercise line stays pending until the next exercise or the end of the
/// block, so `#` lines that follow it can still refine it.
pub struct BlockAssembler<'a> {
    extractor: &'a TokenExtractor,
    block: SwimBlock,
    pending: Option<ExerciseTokens>,
    /// Form-A refinements of `pending`, appended on flush.
    pending_sub_details: Vec<String>,
    desc_parts: Vec<String>,
    block_mod_parts: Vec<String>,
    /// Modalities already set by an inline `x2 (...) trailing` line.
    inline_modalities: bool,
    lines_seen: usize,
}

impl<'a> BlockAssembler<'a> {
    pub fn new(extractor: &'a TokenExtractor, default_title: impl Into<String>) -> Self {
        Self {
            extractor,
            block: SwimBlock {
                title: default_title.into(),
                ..SwimBlock::default()
            },
            pending: None,
            pending_sub_details: Vec::new(),
            desc_parts: Vec::new(),
            block_mod_parts: Vec::new(),
            inline_modalities: false,
            lines_seen: 0,
        }
    }

    pub fn push(&mut self, line: &ClassifiedLine) {
        match line.line_type {
            LineType::Empty => {}
            LineType::BlockRep => self.block_rep(&line.trimmed),
            LineType::Exercise => {
                self.flush();
                self.pending = Some(self.extractor.extract(&line.trimmed));
            }
            LineType::SubDetail => self.sub_detail(&line.trimmed),
            LineType::Continuation => {
                self.flush();
                let content = line.trimmed.trim_start_matches('+').trim();
                if content.starts_with(|c: char| c.is_ascii_digit()) {
                    self.pending = Some(self.extractor.extract(content));
                } else if !content.is_empty() {
                    self.desc_parts.push(content.to_string());
                }
            }
            LineType::Annotation => self.desc_parts.push(line.trimmed.clone()),
            LineType::Unparsed => {
                if self.lines_seen == 0
                    && self.pending.is_none()
                    && self.block.exercises.is_empty()
                {
                    self.block.title = line.trimmed.clone();
                } else {
                    self.desc_parts.push(line.trimmed.clone());
                }
            }
        }
        self.lines_seen += 1;
    }

    pub fn finish(mut self) -> SwimBlock {
        // EOF flush
        self.flush();

        if !self.desc_parts.is_empty() {
            self.block.description = self.desc_parts.join("\n");
        }
        if !self.block_mod_parts.is_empty() && !self.inline_modalities {
            self.block.modalities = self.block_mod_parts.join(MODALITY_SEPARATOR);
        }
        self.block.equipment = union_equipment(&self.block.exercises);

        self.block
    }

    fn block_rep(&mut self, text: &str) {
        let Some(caps) = BLOCK_REP_COUNT.captures(text) else {
            return;
        };

        if let Ok(count) = caps[1].parse::<u32>()
            && count >= 1
        {
            self.block.repetitions = Some(count);
        }

        let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
        if rest.is_empty() {
            return;
        }

        match split_parenthesized(rest) {
            Some((inner, trailing)) => {
                self.flush();
                for segment in split_top_level(inner, '+') {
                    if segment.starts_with(|c: char| c.is_ascii_digit()) {
                        let tokens = self.extractor.extract(segment);
                        self.block.exercises.push(tokens.into());
                    }
                }
                if !trailing.is_empty() {
                    self.block.modalities = trailing.to_string();
                    self.inline_modalities = true;
                }
            }
            None => self.block_mod_parts.push(rest.to_string()),
        }
    }

    fn sub_detail(&mut self, text: &str) {
        match parse_sub_detail(self.extractor, text) {
            SubDetail::Refinement { text, tokens } => {
                if self.pending.is_some() {
                    self.pending_sub_details.push(text);
                } else {
                    self.block.exercises.push(tokens.into());
                }
            }
            SubDetail::Annotation(note) if note.is_empty() => {}
            SubDetail::Annotation(note) => match self.pending.as_mut() {
                Some(pending) => {
                    append_modality(&mut pending.modalities, &note, MODALITY_SEPARATOR)
                }
                None => self.desc_parts.push(note),
            },
        }
    }

    fn flush(&mut self) {
        let Some(mut tokens) = self.pending.take() else {
            return;
        };
        if !self.pending_sub_details.is_empty() {
            let refinements = self.pending_sub_details.join("\n");
            append_modality(&mut tokens.modalities, &refinements, "\n");
            self.pending_sub_details.clear();
        }
        self.block.exercises.push(tokens.into());
    }
}

/// Splits `(inner) trailing`, honouring nested parentheses.
///
/// An unclosed group runs to the end of the text. Returns `None` when the
/// text does not start with `(`.
fn split_parenthesized(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_prefix('(')?;
    let mut depth = 0usize;
    for (idx, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => {
                return Some((&body[..idx], body[idx + 1..].trim()));
            }
            ')' => depth -= 1,
            _ => {}
        }
    }
    Some((body, ""))
}

/// Splits on `separator` outside parentheses, trimming each piece.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                pieces.push(text[start..idx].trim());
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(text[start..].trim());
    pieces
}
