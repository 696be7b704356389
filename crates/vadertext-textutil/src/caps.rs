//! ALL-CAPS emphasis detection over a tokenized sentence.

/// Returns `true` if uppercasing `word` character by character leaves it
/// unchanged.
///
/// Tokens without cased letters (`"123"`, `"!!"`, `""`) count as all-caps.
/// Characters whose uppercase form is more than one character, such as `ß`
/// or `ﬁ`, have no single-character uppercase and are left as they are, so
/// `"STRAßE"` is all-caps.
#[must_use]
pub fn is_all_caps(word: &str) -> bool {
    word.chars().all(|c| {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u == c,
            _ => true,
        }
    })
}

/// Returns `true` when some, but not all, of `words` are ALL CAPS.
///
/// A sentence written entirely in capitals has nothing to contrast against,
/// and one without any capitalized token carries no emphasis, so both return
/// `false`. An empty sequence returns `false`.
#[must_use]
pub fn has_partial_caps_emphasis<S: AsRef<str>>(words: &[S]) -> bool {
    let all_caps = words.iter().filter(|w| is_all_caps(w.as_ref())).count();
    let cap_diff = words.len() - all_caps;
    cap_diff > 0 && cap_diff < words.len()
}

#[cfg(test)]
#[path = "caps_test.rs"]
mod tests;
