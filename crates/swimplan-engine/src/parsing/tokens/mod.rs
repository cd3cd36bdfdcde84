//! # Token Extraction
//!
//! Turns one exercise line into [`ExerciseTokens`]. Steps run in a fixed
//! order and earlier ones can hide text from later ones:
//!
//! 1. rest/departure is read from the untouched line, then blanked out
//! 2. accents are stripped to get the ASCII copy used for keywords
//! 3. repetitions × distance, or a leading distance
//! 4. `↗` forces progressive intensity
//! 5. drill codes (`D2B`, `DP`, ...) mark protected zones
//! 6. intensity, stroke, stroke type: first rule wins
//! 7. equipment: every rule, de-duplicated
//! 8. modalities from the accented text
//!
//! ## Modules
//!
//! - **`rest`**: `@`/`d:`/`r:` groups and the time notation
//! - **`keywords`**: accent stripping, protected zones, ordered keyword tables
//! - **`modalities`**: free-text annotation segments

pub mod keywords;
pub mod modalities;
pub mod rest;

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Equipment, Intensity, RestType, Stroke, StrokeType, SwimExercise};

use keywords::{
    EQUIPMENT_RULES, INTENSITY_RULES, ProtectedZones, STROKE_RULES, STROKE_TYPE_RULES,
    all_matches, first_match, strip_accents,
};
use modalities::{DEFAULT_MODALITY_TOKENS, ModalityToken, extract_modalities};
use rest::{parse_rest_token, remove_rest_parts};

static REPS_BY_DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*[*x×]\s*(\d+)").expect("Invalid repetition regex")
});
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("Invalid leading number regex"));

const PROGRESSIVE_MARK: char = '↗';

static DEFAULT_EXTRACTOR: LazyLock<TokenExtractor> = LazyLock::new(TokenExtractor::default);

/// Fields extracted from a single line, before they become a [`SwimExercise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTokens {
    pub repetitions: u32,
    pub distance: Option<u32>,
    pub stroke: Stroke,
    pub stroke_type: StrokeType,
    pub intensity: Intensity,
    pub rest: Option<u32>,
    pub rest_type: RestType,
    pub equipment: Vec<Equipment>,
    pub modalities: String,
}

impl Default for ExerciseTokens {
    fn default() -> Self {
        Self {
            repetitions: 1,
            distance: None,
            stroke: Stroke::default(),
            stroke_type: StrokeType::default(),
            intensity: Intensity::default(),
            rest: None,
            rest_type: RestType::default(),
            equipment: Vec::new(),
            modalities: String::new(),
        }
    }
}

impl From<ExerciseTokens> for SwimExercise {
    fn from(tokens: ExerciseTokens) -> Self {
        Self {
            repetitions: tokens.repetitions.max(1),
            distance: tokens.distance,
            stroke: tokens.stroke,
            stroke_type: tokens.stroke_type,
            intensity: tokens.intensity,
            rest: tokens.rest,
            rest_type: tokens.rest_type,
            equipment: tokens.equipment,
            modalities: tokens.modalities,
        }
    }
}

/// Token extractor with its modality vocabulary compiled.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    modality_tokens: Vec<ModalityToken>,
}

impl TokenExtractor {
    /// Builds an extractor knowing the default modality tokens plus `extra`.
    pub fn new<S: AsRef<str>>(extra: &[S]) -> Self {
        let mut modality_tokens: Vec<ModalityToken> = DEFAULT_MODALITY_TOKENS
            .iter()
            .filter_map(|token| ModalityToken::new(token))
            .collect();
        modality_tokens.extend(
            extra
                .iter()
                .filter_map(|token| ModalityToken::new(token.as_ref())),
        );
        Self { modality_tokens }
    }

    pub fn extract(&self, text: &str) -> ExerciseTokens {
        let mut tokens = ExerciseTokens::default();

        if let Some(rest) = parse_rest_token(text) {
            tokens.rest = Some(rest.seconds);
            tokens.rest_type = rest.rest_type;
        }

        let without_rest = remove_rest_parts(text);
        let ascii = strip_accents(&without_rest);

        if let Some(caps) = REPS_BY_DISTANCE.captures(&ascii) {
            if let Some(repetitions) = parse_count(&caps[1]) {
                tokens.repetitions = repetitions.max(1);
            }
            tokens.distance = parse_count(&caps[2]);
        } else if let Some(caps) = LEADING_NUMBER.captures(&ascii) {
            tokens.distance = parse_count(&caps[1]);
        }

        let zones = ProtectedZones::find(&ascii);

        if text.contains(PROGRESSIVE_MARK) {
            tokens.intensity = Intensity::Prog;
        } else if let Some(intensity) = first_match(&INTENSITY_RULES, &ascii, &zones) {
            tokens.intensity = intensity;
        }

        if let Some(stroke) = first_match(&STROKE_RULES, &ascii, &zones) {
            tokens.stroke = stroke;
        }
        if let Some(stroke_type) = first_match(&STROKE_TYPE_RULES, &ascii, &zones) {
            tokens.stroke_type = stroke_type;
        }
        tokens.equipment = all_matches(&EQUIPMENT_RULES, &ascii, &zones);

        tokens.modalities = extract_modalities(&without_rest, text, &self.modality_tokens);

        tokens
    }
}

impl Default for TokenExtractor {
    fn default() -> Self {
        Self::new::<&str>(&[])
    }
}

/// Extracts the exercise fields of one line with the default vocabulary.
pub fn parse_exercise_tokens(text: &str) -> ExerciseTokens {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Parses a digit run; overflow leaves the field at its default.
fn parse_count(digits: &str) -> Option<u32> {
    digits.parse().ok()
}
