//! Source file loaders.
//!
//! Each locale file is loaded into a [`Tree`]. The loader is picked by file
//! extension:
//! - `json`: JSON object
//! - `toml`: TOML document

use std::{io, path::Path};

use thiserror::Error;

use super::tree::Tree;

pub mod json;
pub mod toml;

/// Extensions that have a loader.
pub const SOURCE_EXTENSIONS: &[&str] = &["json", "toml"];

/// Why a source file could not be loaded. Always recoverable: the file is
/// skipped and the export continues.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found")]
    NotFound,
    #[error("failed to read file: {0}")]
    Read(#[source] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] ::toml::de::Error),
    #[error("root must be an object, found {0}")]
    NotAnObject(&'static str),
    #[error("unsupported file type (expected one of: {})", SOURCE_EXTENSIONS.join(", "))]
    UnsupportedExtension,
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound,
            _ => LoadError::Read(err),
        }
    }
}

/// Load a translation tree from `path`, dispatching on its extension.
pub fn load_tree(path: &Path) -> Result<Tree, LoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => json::load_json_file(path),
        Some("toml") => toml::load_toml_file(path),
        _ => Err(LoadError::UnsupportedExtension),
    }
}
