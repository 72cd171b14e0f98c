//! Explicit choice syntax: `{0} none|{1} one|[2,*] many`.

use std::sync::LazyLock;

use regex::Regex;

use super::placeholder::rewrite;

static ZERO_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\{\s*0\s*\}\s*(.+)$").unwrap());
static ONE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\{\s*1\s*\}\s*(.+)$").unwrap());
static MANY_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\[\s*2\s*,\s*\*\s*\]\s*(.+)$").unwrap());

/// Plural category used as a key suffix by the target runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PluralBucket {
    Zero,
    One,
    Other,
}

impl PluralBucket {
    pub fn suffix(&self) -> &'static str {
        match self {
            PluralBucket::Zero => "zero",
            PluralBucket::One => "one",
            PluralBucket::Other => "other",
        }
    }

    /// `fruit` → `fruit_one`
    pub fn key_for(&self, key: &str) -> String {
        format!("{}_{}", key, self.suffix())
    }
}

impl std::fmt::Display for PluralBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Resolved text for each plural bucket. Buckets never supplied are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceVariants {
    pub zero: String,
    pub one: String,
    pub other: String,
}

impl ChoiceVariants {
    pub fn get(&self, bucket: PluralBucket) -> &str {
        match bucket {
            PluralBucket::Zero => &self.zero,
            PluralBucket::One => &self.one,
            PluralBucket::Other => &self.other,
        }
    }

    /// Buckets in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (PluralBucket, &str)> {
        [PluralBucket::Zero, PluralBucket::One, PluralBucket::Other]
            .into_iter()
            .map(|bucket| (bucket, self.get(bucket)))
    }
}

/// Which marker a segment starts with, and the text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker<'a> {
    Zero(&'a str),
    One(&'a str),
    Many(&'a str),
    Unmarked(&'a str),
}

fn parse_marker(segment: &str) -> Marker<'_> {
    let capture = |regex: &Regex| {
        regex
            .captures(segment)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    };

    if let Some(text) = capture(&ZERO_MARKER_REGEX) {
        Marker::Zero(text)
    } else if let Some(text) = capture(&ONE_MARKER_REGEX) {
        Marker::One(text)
    } else if let Some(text) = capture(&MANY_MARKER_REGEX) {
        Marker::Many(text)
    } else {
        Marker::Unmarked(segment)
    }
}

/// Slot every segment into the zero/one/other buckets.
///
/// `{0}` and `{1}` overwrite their bucket; `[2,*]` and unmarked segments are
/// appended to `other`, space-joined. Unrecognized markers such as `{5}` or
/// `[3,7]` fall into `other` together with the marker text.
pub fn resolve<S: AsRef<str>>(segments: &[S]) -> ChoiceVariants {
    let mut zero = String::new();
    let mut one = String::new();
    let mut other = String::new();

    for segment in segments {
        match parse_marker(segment.as_ref().trim()) {
            Marker::Zero(text) => zero = rewrite(text),
            Marker::One(text) => one = rewrite(text),
            Marker::Many(text) | Marker::Unmarked(text) => {
                other.push(' ');
                other.push_str(&rewrite(text));
            }
        }
    }

    ChoiceVariants {
        zero: zero.trim().to_string(),
        one: one.trim().to_string(),
        other: other.trim().to_string(),
    }
}
