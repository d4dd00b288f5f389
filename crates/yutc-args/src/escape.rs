//! Backslash de-escaping, applied when the parser runs with escapes enabled.

use std::borrow::Cow;

/// Replaces every `\x` with `x`. A lone trailing `\` is kept.
///
/// Borrows the input when it contains no backslash.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
