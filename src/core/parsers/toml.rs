use std::{fs, path::Path};

use super::LoadError;
use crate::core::tree::Tree;

pub fn parse_toml_tree(content: &str) -> Result<Tree, LoadError> {
    // A TOML document is always a table at the root.
    let table: toml::Table = toml::from_str(content)?;
    Ok(Tree::from(toml::Value::Table(table)))
}

pub fn load_toml_file(path: &Path) -> Result<Tree, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_toml_tree(&content)
}
