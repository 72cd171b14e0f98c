use std::{fs, path::Path};

use serde::Serialize;

use super::error::ExportError;

/// Serialize `value` as pretty JSON: two-space indentation, non-ASCII
/// characters written literally, trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let content = serde_json::to_string_pretty(value)?;
    Ok(format!("{}\n", content))
}

/// Write `value` as pretty JSON to `path`, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExportError> {
    let content = to_pretty_json(value).map_err(|source| ExportError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
