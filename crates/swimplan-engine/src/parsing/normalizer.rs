//! Text canonicalisation run before line classification.
//!
//! Downstream patterns assume `\n` line endings, ASCII quotes and plain
//! spaces.

/// Canonicalises line endings and punctuation, and drops a leading byte
/// order mark.
///
/// The double prime `″` is left alone: it is a valid seconds marker in the
/// time notation.
pub fn normalize_text(raw: &str) -> String {
    let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => out.push('"'),
            '\u{00A0}' | '\u{202F}' | '\u{2007}' => out.push(' '),
            other => out.push(other),
        }
    }

    out
}
