//! Rest and departure notation.
//!
//! - departure: `@1'30`, `d:45''`, `D : 2'`
//! - rest: `r:20''`, `r : 1'`, `r:15`
//!
//! A time is `min'sec`, `sec''` (also `sec"` and `sec″`), or a bare number of
//! seconds. `@1'30/1'45` lists alternatives; only the first is read.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::RestType;

/// One time value, without captures, for embedding in larger patterns.
const TIME: &str = r#"\d+(?:\s*(?:''|"|″)|'\d{0,2}(?:''|"|″)?)?"#;

static DEPARTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(?:@|\bd\s*:)\s*({TIME})(?:\s*/\s*{TIME})*"))
        .expect("Invalid departure regex")
});
static REST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\br\s*:\s*({TIME})(?:\s*/\s*{TIME})*")).expect("Invalid rest regex")
});
static TIME_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\d+)\s*(?:(''|"|″)|'(\d{0,2})(?:''|"|″)?)?$"#)
        .expect("Invalid time notation regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestToken {
    pub seconds: u32,
    pub rest_type: RestType,
}

/// Finds the rest or departure of a line. Departure wins when both are present.
pub fn parse_rest_token(text: &str) -> Option<RestToken> {
    let first_time = |re: &Regex| {
        re.captures_iter(text)
            .find_map(|caps| caps.get(1).and_then(|m| parse_time_notation(m.as_str())))
    };

    if let Some(seconds) = first_time(&DEPARTURE) {
        return Some(RestToken {
            seconds,
            rest_type: RestType::Departure,
        });
    }

    first_time(&REST).map(|seconds| RestToken {
        seconds,
        rest_type: RestType::Rest,
    })
}

/// Blanks out every rest/departure group, alternatives included, so later
/// steps do not read its digits as distances or its letters as keywords.
pub fn remove_rest_parts(text: &str) -> String {
    let without_departure = DEPARTURE.replace_all(text, " ");
    REST.replace_all(&without_departure, " ").into_owned()
}

/// Converts a time value to seconds.
///
/// Returns `None` for malformed input or values that overflow.
pub fn parse_time_notation(text: &str) -> Option<u32> {
    let caps = TIME_PARTS.captures(text.trim())?;
    let leading: u32 = caps.get(1)?.as_str().parse().ok()?;

    if caps.get(2).is_some() {
        return Some(leading);
    }

    match caps.get(3) {
        Some(seconds) => {
            let seconds: u32 = if seconds.as_str().is_empty() {
                0
            } else {
                seconds.as_str().parse().ok()?
            };
            leading.checked_mul(60)?.checked_add(seconds)
        }
        None => Some(leading),
    }
}
