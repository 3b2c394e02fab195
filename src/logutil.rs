//! Helpers for logging raw player input on a single line.

use std::fmt::Write;

/// Longest input preview written to the log, in characters.
pub const MAX_INPUT_PREVIEW: usize = 120;

/// Escape a line of player input for single-line logging.
///
/// Backslashes, newlines, carriage returns and tabs become `\\`, `\n`, `\r`
/// and `\t`; any other control character becomes `\xNN`. Input longer than
/// [`MAX_INPUT_PREVIEW`] characters is cut off with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_INPUT_PREVIEW) + 8);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_INPUT_PREVIEW) {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}
