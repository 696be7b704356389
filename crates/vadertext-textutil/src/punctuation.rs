//! Punctuation run cleanup applied to raw text before tokenization.

use std::sync::LazyLock;

use regex::Regex;

/// Characters treated as punctuation when collapsing runs: ASCII punctuation
/// plus the horizontal ellipsis glyph.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\u{2026}";

const ELLIPSIS: char = '\u{2026}';

/// Maximal runs of characters other than ASCII whitespace (tab, newline,
/// form feed, carriage return, space).
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\t\n\x0C\r ]+").expect("valid whitespace run regex"));

/// Returns `true` if `c` belongs to [`PUNCTUATION`].
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Iterates over the non-whitespace runs of `text`, in order.
///
/// This is the split a simple tokenizer performs before stripping
/// punctuation from each run.
pub fn whitespace_runs(text: &str) -> impl Iterator<Item = &str> + '_ {
    WHITESPACE_RUN_RE.find_iter(text).map(|m| m.as_str())
}

/// Removes punctuation characters that repeat the character emitted just
/// before them.
///
/// `.` and `…` are interchangeable for this purpose, so `"Wait..."`,
/// `"Wait…"` and `"Wait.…"` all keep only their first ellipsis character.
/// Runs are only merged when adjacent: `"!!?!!"` becomes `"!?!"`.
/// Non-punctuation characters are never removed or reordered.
#[must_use]
pub fn collapse_punctuation(text: &str) -> String {
    let (out, _) = text.chars().fold(
        (String::with_capacity(text.len()), ' '),
        |(mut out, last), c| {
            if is_punctuation(c) && repeats(last, c) {
                return (out, last);
            }
            out.push(c);
            (out, c)
        },
    );
    out
}

fn repeats(last: char, c: char) -> bool {
    last == c || matches!((last, c), ('.', ELLIPSIS) | (ELLIPSIS, '.'))
}

#[cfg(test)]
#[path = "punctuation_test.rs"]
mod tests;
