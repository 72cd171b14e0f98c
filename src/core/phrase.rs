//! Phrase splitting and dialect classification.
//!
//! A phrase is split on `|` separators that sit outside every balanced
//! `{...}` span. The resulting segments decide which of the three dialects
//! the phrase uses:
//!
//! - one segment: a plain string
//! - two unmarked segments: `singular|plural` shorthand
//! - anything else: explicit choice syntax (`{0} none|{1} one|[2,*] many`)

use std::sync::LazyLock;

use regex::Regex;

use super::choice::{ChoiceVariants, resolve};
use super::placeholder::rewrite;

pub const SEPARATOR: char = '|';

/// `{2` or `[ 2` at the start of a segment marks explicit choice syntax.
static COUNT_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[{\[]\s*\d").unwrap());

/// Classified and rewritten phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No separator: a plain rewritten string.
    Single(String),
    /// `singular|plural` shorthand.
    SimplePlural { one: String, other: String },
    /// Explicit `{0}`/`{1}`/`[2,*]` choice syntax.
    Choice(ChoiceVariants),
}

/// Split `phrase` on separators outside of balanced `{...}` spans.
///
/// A `{` without a matching `}` is plain text and does not protect the
/// separators after it; a stray `}` is ignored.
///
/// ```
/// use transloc::core::phrase::split_segments;
///
/// assert_eq!(
///     split_segments("text {with|bar} rest|other"),
///     vec!["text {with|bar} rest", "other"]
/// );
/// ```
pub fn split_segments(phrase: &str) -> Vec<&str> {
    let balanced = balanced_braces(phrase);

    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in phrase.char_indices() {
        match c {
            '{' if balanced.binary_search(&i).is_ok() => depth += 1,
            '}' if balanced.binary_search(&i).is_ok() => depth -= 1,
            SEPARATOR if depth == 0 => {
                segments.push(&phrase[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    segments.push(&phrase[start..]);
    segments
}

/// Byte offsets of every brace that belongs to a matched `{`/`}` pair.
fn balanced_braces(phrase: &str) -> Vec<usize> {
    let mut open: Vec<usize> = Vec::new();
    let mut matched = Vec::new();

    for (i, c) in phrase.char_indices() {
        match c {
            '{' => open.push(i),
            '}' => {
                if let Some(start) = open.pop() {
                    matched.push(start);
                    matched.push(i);
                }
            }
            _ => {}
        }
    }
    matched.sort_unstable();
    matched
}

/// True if the trimmed segment starts with `{digit` or `[digit`.
pub fn has_count_marker(segment: &str) -> bool {
    COUNT_MARKER_REGEX.is_match(segment.trim())
}

/// Split a phrase and rewrite it according to its dialect.
pub fn split_and_classify(phrase: &str) -> Classification {
    let segments = split_segments(phrase);

    match segments.as_slice() {
        [_] => Classification::Single(rewrite(phrase)),
        [one, other] if !has_count_marker(one) && !has_count_marker(other) => {
            Classification::SimplePlural {
                one: rewrite(one.trim()),
                other: rewrite(other.trim()),
            }
        }
        _ => Classification::Choice(resolve(&segments)),
    }
}
