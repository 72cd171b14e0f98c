//! Export driver: source tree → transformed JSON → version ledger.
//!
//! For each selected locale every source file under
//! `<source_root>/<locale>/` is loaded, transformed and written to the same
//! relative path under `<output_root>/<locale>/` with a `.json` extension.
//! Files that cannot be loaded are skipped with an issue; anything that
//! prevents writing output aborts the run.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use glob::Pattern;

use super::error::ExportError;
use super::ledger::{Ledger, LedgerUpdate};
use super::parsers::load_tree;
use super::scanner::{SourceFile, discover_locales, scan_locale_files, to_slash_path};
use super::transform::{TransformOptions, TransformStats, Transformer};
use super::writer::write_json;
use crate::issues::{
    InaccessiblePathIssue, InvalidLedgerIssue, Issue, OutputConflictIssue, SkippedFileIssue,
};

/// Everything an export run needs to know.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    /// Version ledger to update after each locale. `None` disables it.
    pub ledger_file: Option<PathBuf>,
    /// Patterns matched against paths relative to each locale directory.
    pub ignores: Vec<Pattern>,
    pub transform: TransformOptions,
}

/// One source file that was written.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    /// Source path relative to the locale directory, `/`-separated.
    pub source: String,
    /// Output path relative to the locale output directory.
    pub output: String,
    pub stats: TransformStats,
}

#[derive(Debug, Clone)]
pub struct LocaleExport {
    pub locale: String,
    pub files: Vec<ExportedFile>,
    pub skipped_count: usize,
    pub ignored_count: usize,
    pub ledger: Option<LedgerUpdate>,
}

impl LocaleExport {
    pub fn stats(&self) -> TransformStats {
        let mut total = TransformStats::default();
        for file in &self.files {
            total += file.stats;
        }
        total
    }
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub locales: Vec<LocaleExport>,
    pub issues: Vec<Issue>,
}

impl ExportSummary {
    pub fn files_written(&self) -> usize {
        self.locales.iter().map(|l| l.files.len()).sum()
    }

    pub fn files_skipped(&self) -> usize {
        self.locales.iter().map(|l| l.skipped_count).sum()
    }
}

/// Resolve which locales to export. With `requested`, it must name an
/// existing locale directory.
pub fn select_locales(source_root: &Path, requested: Option<&str>) -> Result<Vec<String>, ExportError> {
    let available = discover_locales(source_root)?;

    match requested {
        None => Ok(available),
        Some(locale) if available.iter().any(|l| l == locale) => Ok(vec![locale.to_string()]),
        Some(locale) => Err(ExportError::UnknownLocale {
            locale: locale.to_string(),
            root: source_root.to_path_buf(),
            available,
        }),
    }
}

/// Export one locale, or every discovered locale when `locale` is `None`.
pub fn export(options: &ExportOptions, locale: Option<&str>) -> Result<ExportSummary, ExportError> {
    let locales = select_locales(&options.source_root, locale)?;
    let ledger = options
        .ledger_file
        .as_ref()
        .map(|path| Ledger::new(path, &options.output_root));

    let mut summary = ExportSummary::default();
    for locale in &locales {
        let mut result = export_locale(options, locale, &mut summary.issues)?;

        if let Some(ledger) = &ledger {
            let update = ledger.update(locale)?;
            if update.replaced_invalid {
                summary.issues.push(Issue::InvalidLedger(InvalidLedgerIssue {
                    ledger_path: ledger.path().to_string_lossy().to_string(),
                }));
            }
            result.ledger = Some(update);
        }

        summary.locales.push(result);
    }

    summary.issues.sort();
    Ok(summary)
}

/// Export every source file of a single locale.
pub fn export_locale(
    options: &ExportOptions,
    locale: &str,
    issues: &mut Vec<Issue>,
) -> Result<LocaleExport, ExportError> {
    let locale_dir = options.source_root.join(locale);
    let output_dir = options.output_root.join(locale);
    let scan = scan_locale_files(&locale_dir, &options.ignores);

    issues.extend(scan.skipped.into_iter().map(|skipped| {
        Issue::InaccessiblePath(InaccessiblePathIssue {
            locale: locale.to_string(),
            path: skipped.path,
            error: skipped.error,
        })
    }));

    let mut result = LocaleExport {
        locale: locale.to_string(),
        files: Vec::new(),
        skipped_count: 0,
        ignored_count: scan.ignored_count,
        ledger: None,
    };
    // output path → source path that produced it
    let mut written: HashMap<String, String> = HashMap::new();

    for file in &scan.files {
        let source = to_slash_path(&file.relative);
        let output = output_relative_path(file);

        if let Some(first) = written.get(&output) {
            result.skipped_count += 1;
            issues.push(Issue::OutputConflict(OutputConflictIssue {
                locale: locale.to_string(),
                file_path: display_path(&file.path),
                output_path: output.clone(),
                written_from: first.clone(),
            }));
            continue;
        }

        let tree = match load_tree(&file.path) {
            Ok(tree) => tree,
            Err(err) => {
                result.skipped_count += 1;
                issues.push(Issue::SkippedFile(SkippedFileIssue::new(
                    locale,
                    display_path(&file.path),
                    &err,
                )));
                continue;
            }
        };

        let mut transformer = Transformer::new(options.transform);
        let transformed = transformer.run(&tree);
        write_json(&output_dir.join(&output), &transformed.to_json())?;

        written.insert(output.clone(), source.clone());
        result.files.push(ExportedFile {
            source,
            output,
            stats: transformer.stats(),
        });
    }

    Ok(result)
}

/// `nested/auth.toml` → `nested/auth.json`
fn output_relative_path(file: &SourceFile) -> String {
    to_slash_path(&file.relative.with_extension("json"))
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
