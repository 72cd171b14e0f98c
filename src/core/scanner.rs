//! Locale discovery and source file enumeration.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use super::error::ExportError;

/// A file found under a locale directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// Path relative to the locale directory, e.g. `nested/auth.json`.
    pub relative: PathBuf,
}

/// A path that could not be visited while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: String,
    pub error: String,
}

/// Result of scanning one locale directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files in sorted relative-path order.
    pub files: Vec<SourceFile>,
    /// Number of files matched by an ignore pattern.
    pub ignored_count: usize,
    pub skipped: Vec<SkippedPath>,
}

/// Dot-prefixed entries (`.DS_Store`, `.git`) are never translation sources.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Render a relative path with `/` separators so ignore patterns behave the
/// same on every platform.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// List locale codes: the names of the subdirectories of `source_root`,
/// sorted.
pub fn discover_locales(source_root: &Path) -> Result<Vec<String>, ExportError> {
    if !source_root.exists() {
        return Err(ExportError::SourceRootNotFound(source_root.to_path_buf()));
    }
    if !source_root.is_dir() {
        return Err(ExportError::NotADirectory(source_root.to_path_buf()));
    }

    let entries = fs::read_dir(source_root).map_err(|source| ExportError::Read {
        path: source_root.to_path_buf(),
        source,
    })?;

    let mut locales: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| !name.starts_with('.'))
        .collect();
    locales.sort();
    Ok(locales)
}

/// Walk `locale_dir` recursively and collect every regular file that no
/// ignore pattern matches. Patterns are matched against the slash-separated
/// path relative to `locale_dir`.
///
/// Symlinks are followed and listed under the link's own path. Broken links
/// and link loops end up in `skipped`.
pub fn scan_locale_files(locale_dir: &Path, ignores: &[Pattern]) -> ScanResult {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(locale_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| locale_dir.to_string_lossy().to_string());
                result.skipped.push(SkippedPath {
                    path,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(locale_dir)
            .unwrap_or(entry.path())
            .to_path_buf();

        let slash_path = to_slash_path(&relative);
        if ignores.iter().any(|p| p.matches(&slash_path)) {
            result.ignored_count += 1;
            continue;
        }

        result.files.push(SourceFile {
            path: entry.path().to_path_buf(),
            relative,
        });
    }

    result
        .files
        .sort_by(|a, b| to_slash_path(&a.relative).cmp(&to_slash_path(&b.relative)));
    result
}
