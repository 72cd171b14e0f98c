//! Tree transformation.
//!
//! Walks a translation tree and rewrites every string leaf. Plural leaves are
//! expanded into suffixed sibling keys:
//!
//! ```text
//! "apples": "{0} none|{1} one|[2,*] :count"
//!   → "apples_zero": "none", "apples_one": "one", "apples_other": "{{count}}"
//! ```

use super::choice::PluralBucket;
use super::phrase::{Classification, split_and_classify};
use super::tree::{Namespace, Scalar, Tree};

/// What to do with explicit-choice buckets that received no text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyBuckets {
    /// Emit `_zero`/`_one` even when empty.
    #[default]
    Keep,
    /// Suppress empty `_zero`/`_one`. `_other` is always emitted.
    Drop,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    pub empty_buckets: EmptyBuckets,
}

/// Leaf counts gathered during a transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// String leaves without plural semantics.
    pub plain: usize,
    /// `singular|plural` leaves.
    pub simple_plurals: usize,
    /// Explicit choice leaves.
    pub choices: usize,
    /// Numbers, booleans and nulls copied as-is.
    pub passthrough: usize,
}

impl TransformStats {
    pub fn plurals(&self) -> usize {
        self.simple_plurals + self.choices
    }

    pub fn total(&self) -> usize {
        self.plain + self.plurals() + self.passthrough
    }
}

impl std::ops::AddAssign for TransformStats {
    fn add_assign(&mut self, other: Self) {
        self.plain += other.plain;
        self.simple_plurals += other.simple_plurals;
        self.choices += other.choices;
        self.passthrough += other.passthrough;
    }
}

/// Transform with default options.
pub fn transform(tree: &Tree) -> Tree {
    Transformer::new(TransformOptions::default()).run(tree)
}

pub struct Transformer {
    options: TransformOptions,
    stats: TransformStats,
}

impl Transformer {
    pub fn new(options: TransformOptions) -> Self {
        Self {
            options,
            stats: TransformStats::default(),
        }
    }

    pub fn stats(&self) -> TransformStats {
        self.stats
    }

    /// Transform a tree. Only namespaces carry keys, so a bare leaf at the
    /// root is returned unchanged.
    pub fn run(&mut self, tree: &Tree) -> Tree {
        match tree {
            Tree::Node(namespace) => Tree::Node(self.transform_namespace(namespace)),
            Tree::Leaf(_) => tree.clone(),
        }
    }

    fn transform_namespace(&mut self, input: &Namespace) -> Namespace {
        let mut output = Namespace::new();

        for (key, value) in input.iter() {
            match value {
                Tree::Node(nested) => {
                    output.insert(key, Tree::Node(self.transform_namespace(nested)));
                }
                Tree::Leaf(Scalar::String(phrase)) => {
                    self.transform_phrase(key, phrase, &mut output);
                }
                Tree::Leaf(_) => {
                    self.stats.passthrough += 1;
                    output.insert(key, value.clone());
                }
            }
        }

        output
    }

    fn transform_phrase(&mut self, key: &str, phrase: &str, output: &mut Namespace) {
        match split_and_classify(phrase) {
            Classification::Single(text) => {
                self.stats.plain += 1;
                output.insert(key, Tree::string(text));
            }
            Classification::SimplePlural { one, other } => {
                self.stats.simple_plurals += 1;
                output.insert(PluralBucket::One.key_for(key), Tree::string(one));
                output.insert(PluralBucket::Other.key_for(key), Tree::string(other));
            }
            Classification::Choice(variants) => {
                self.stats.choices += 1;
                for (bucket, text) in variants.iter() {
                    let skip = self.options.empty_buckets == EmptyBuckets::Drop
                        && bucket != PluralBucket::Other
                        && text.is_empty();
                    if !skip {
                        output.insert(bucket.key_for(key), Tree::string(text));
                    }
                }
            }
        }
    }
}
