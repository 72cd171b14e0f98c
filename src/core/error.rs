use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort an export run before or while writing output.
///
/// Per-file problems are not errors; they become issues and the run
/// continues (see [`crate::issues`]).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(
        "Source directory '{}' does not exist.\n\
         Hint: Check the 'sourceRoot' setting in .translocrc.json or pass --source-root.",
        .0.display()
    )]
    SourceRootNotFound(PathBuf),

    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Locale [{locale}] does not exist in {} (available: {})", .root.display(), format_available(.available))]
    UnknownLocale {
        locale: String,
        root: PathBuf,
        available: Vec<String>,
    },

    #[error("Failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize JSON for '{}'", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}
