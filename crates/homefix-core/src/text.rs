//! Text normalization shared by the classifier and discipline parsing.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize free text for keyword matching.
///
/// Performs:
/// - Lowercase conversion
/// - Unicode NFD decomposition with combining marks removed (`baño` -> `bano`)
/// - Whitespace collapsing
///
/// Lowercasing runs first since it can itself emit combining marks
/// (`İ` lowercases to `i` followed by U+0307).
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let folded: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check whether `phrase` occurs in `haystack` on word boundaries.
///
/// Both inputs are expected to be normalized already. A match only counts
/// when the characters on either side are not alphanumeric, so `now` does
/// not match inside `know`.
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    haystack.match_indices(phrase).any(|(start, matched)| {
        let end = start + matched.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Endings accepted after a word by [`contains_inflected`]
pub const INFLECTIONS: &[&str] =
    &["", "s", "es", "a", "as", "mente", "isimo", "isima", "isimos", "isimas"];

/// Like [`contains_phrase`], but the last word may carry an inflection.
///
/// The phrase must start on a word boundary; the rest of the word after it
/// has to be one of [`INFLECTIONS`]. `plomero` matches `plomeros`, `urgente`
/// matches `urgentemente`, and `now` still does not match `nowhere`.
pub fn contains_inflected(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        if before.is_some_and(char::is_alphanumeric) {
            return false;
        }

        let rest = &haystack[start + matched.len()..];
        let ending_len = rest.find(|c: char| !c.is_alphanumeric()).unwrap_or(rest.len());
        INFLECTIONS.contains(&&rest[..ending_len])
    })
}
