//! Ordered keyword tables for the coded exercise fields.
//!
//! Every table is evaluated top to bottom and, except for equipment, the first
//! rule with an acceptable match wins. Matching runs on the accent-stripped
//! copy of a line.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::models::{Equipment, Intensity, Stroke, StrokeType};

/// Removes diacritics: NFD decomposition, then combining marks are dropped.
pub fn strip_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

/// A keyword pattern and the value it stands for.
pub struct KeywordRule<T> {
    pattern: Regex,
    value: T,
    /// When set, the matched text must be exactly this string.
    literal: Option<&'static str>,
}

impl<T: Clone> KeywordRule<T> {
    fn new(pattern: &str, value: T) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid keyword regex"),
            value,
            literal: None,
        }
    }

    fn literal(pattern: &str, value: T, literal: &'static str) -> Self {
        Self {
            literal: Some(literal),
            ..Self::new(pattern, value)
        }
    }

    /// Whether any occurrence of the pattern survives the protected-zone filter.
    fn matches(&self, text: &str, zones: &ProtectedZones) -> bool {
        self.pattern.find_iter(text).any(|m| {
            !zones.overlaps(m.range()) && self.literal.is_none_or(|lit| m.as_str() == lit)
        })
    }
}

/// Byte ranges covered by drill codes such as `D2B` or `DP`.
///
/// A keyword match overlapping one of these is discarded, so the `D` of `D2B`
/// is never read as the backstroke code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedZones(Vec<Range<usize>>);

static PROTECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:D2B|DP|CB|R2N|AC|CP|RA)\b").expect("Invalid protected token regex")
});

impl ProtectedZones {
    pub fn find(text: &str) -> Self {
        Self(PROTECTED.find_iter(text).map(|m| m.range()).collect())
    }

    pub fn overlaps(&self, span: Range<usize>) -> bool {
        self.0
            .iter()
            .any(|zone| zone.start < span.end && span.start < zone.end)
    }
}

pub static INTENSITY_RULES: LazyLock<Vec<KeywordRule<Intensity>>> = LazyLock::new(|| {
    vec![
        KeywordRule::new(r"(?i)\b(?:vmax|max|vacc)\b", Intensity::Max),
        KeywordRule::new(r"(?i)\bv3\b", Intensity::V3),
        KeywordRule::new(r"(?i)\bv2\b", Intensity::V2),
        KeywordRule::new(r"(?i)\bv1\b", Intensity::V1),
        KeywordRule::new(r"(?i)\b(?:v0|ez|souple)\b", Intensity::V0),
        KeywordRule::new(r"(?i)\bprog\w*", Intensity::Prog),
    ]
});

pub static STROKE_RULES: LazyLock<Vec<KeywordRule<Stroke>>> = LazyLock::new(|| {
    vec![
        KeywordRule::new(r"(?i)\b(?:4n|qn)\b", Stroke::FourN),
        KeywordRule::new(r"(?i)\b(?:crawl|cr|nl)\b", Stroke::Crawl),
        KeywordRule::new(r"(?i)\b(?:papillon|pap)\b", Stroke::Pap),
        KeywordRule::new(r"(?i)\bdos\b", Stroke::Dos),
        KeywordRule::literal(r"\bD\b", Stroke::Dos, "D"),
        KeywordRule::new(r"(?i)\b(?:brasse|br)\b", Stroke::Brasse),
        KeywordRule::new(r"(?i)\bspe\b", Stroke::Spe),
    ]
});

pub static STROKE_TYPE_RULES: LazyLock<Vec<KeywordRule<StrokeType>>> = LazyLock::new(|| {
    vec![
        KeywordRule::new(r"(?i)\beduc\w*", StrokeType::Educ),
        KeywordRule::new(r"(?i)\b(?:jbes|jambes)\b", StrokeType::Jambes),
        KeywordRule::new(r"(?i)\b(?:nac|nc)\b", StrokeType::Nc),
    ]
});

pub static EQUIPMENT_RULES: LazyLock<Vec<KeywordRule<Equipment>>> = LazyLock::new(|| {
    vec![
        KeywordRule::new(r"(?i)\bplaq(?:uettes?)?\b", Equipment::Plaquettes),
        KeywordRule::new(r"(?i)\bpalm(?:es)?\b", Equipment::Palmes),
        KeywordRule::new(r"(?i)\btuba\b", Equipment::Tuba),
        KeywordRule::new(r"(?i)\bpull\b", Equipment::Pull),
        KeywordRule::new(r"(?i)\belas(?:tiques?)?\b", Equipment::Elastique),
    ]
});

/// Value of the first rule that matches outside the protected zones.
pub fn first_match<T: Clone>(
    rules: &[KeywordRule<T>],
    text: &str,
    zones: &ProtectedZones,
) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matches(text, zones))
        .map(|rule| rule.value.clone())
}

/// Values of every matching rule, in table order, without duplicates.
pub fn all_matches<T: Clone + PartialEq>(
    rules: &[KeywordRule<T>],
    text: &str,
    zones: &ProtectedZones,
) -> Vec<T> {
    let mut found: Vec<T> = Vec::new();
    for rule in rules {
        if rule.matches(text, zones) && !found.contains(&rule.value) {
            found.push(rule.value.clone());
        }
    }
    found
}
