use std::{fs, path::Path};

use serde_json::Value;

use super::LoadError;
use crate::core::tree::Tree;

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn parse_json_tree(content: &str) -> Result<Tree, LoadError> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Object(_) => Ok(Tree::from(value)),
        other => Err(LoadError::NotAnObject(json_type_name(&other))),
    }
}

pub fn load_json_file(path: &Path) -> Result<Tree, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_json_tree(&content)
}
