//! In-memory translation tree.
//!
//! Source files of every format are converted into [`Tree`] before
//! transformation, and the transformed tree is converted back into a
//! `serde_json::Value` for writing.

use serde_json::{Map, Number, Value};

/// Non-nested value in a translation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

/// A translation tree: either a leaf value or an ordered namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Leaf(Scalar),
    Node(Namespace),
}

/// Ordered key → subtree mapping with unique keys.
///
/// Inserting an existing key replaces its value in place, keeping the
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    entries: Vec<(String, Tree)>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Tree) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Tree)> for Namespace {
    fn from_iter<I: IntoIterator<Item = (K, Tree)>>(iter: I) -> Self {
        let mut namespace = Namespace::new();
        for (key, value) in iter {
            namespace.insert(key, value);
        }
        namespace
    }
}

impl Tree {
    pub fn string(value: impl Into<String>) -> Self {
        Tree::Leaf(Scalar::String(value.into()))
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Tree::Node(namespace) => Some(namespace),
            Tree::Leaf(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tree::Leaf(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a dotted path such as `auth.login.title`.
    pub fn get_path(&self, path: &str) -> Option<&Tree> {
        path.split('.')
            .try_fold(self, |tree, part| tree.as_namespace()?.get(part))
    }

    pub fn to_json(&self) -> Value {
        match self {
            Tree::Leaf(Scalar::String(s)) => Value::String(s.clone()),
            Tree::Leaf(Scalar::Number(n)) => Value::Number(n.clone()),
            Tree::Leaf(Scalar::Bool(b)) => Value::Bool(*b),
            Tree::Leaf(Scalar::Null) => Value::Null,
            Tree::Node(namespace) => {
                let map: Map<String, Value> = namespace
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect();
                Value::Object(map)
            }
        }
    }
}

impl From<Value> for Tree {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Tree::Leaf(Scalar::String(s)),
            Value::Number(n) => Tree::Leaf(Scalar::Number(n)),
            Value::Bool(b) => Tree::Leaf(Scalar::Bool(b)),
            Value::Null => Tree::Leaf(Scalar::Null),
            Value::Array(items) => Tree::Node(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), Tree::from(item)))
                    .collect(),
            ),
            Value::Object(map) => Tree::Node(
                map.into_iter()
                    .map(|(key, item)| (key, Tree::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for Tree {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Tree::Leaf(Scalar::String(s)),
            toml::Value::Integer(i) => Tree::Leaf(Scalar::Number(i.into())),
            toml::Value::Float(f) => match Number::from_f64(f) {
                Some(n) => Tree::Leaf(Scalar::Number(n)),
                // NaN and infinities have no JSON number form
                None => Tree::Leaf(Scalar::String(f.to_string())),
            },
            toml::Value::Boolean(b) => Tree::Leaf(Scalar::Bool(b)),
            toml::Value::Datetime(dt) => Tree::Leaf(Scalar::String(dt.to_string())),
            toml::Value::Array(items) => Tree::Node(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), Tree::from(item)))
                    .collect(),
            ),
            toml::Value::Table(table) => Tree::Node(
                table
                    .into_iter()
                    .map(|(key, item)| (key, Tree::from(item)))
                    .collect(),
            ),
        }
    }
}
