//! Report formatting and printing utilities.
//!
//! Progress goes to stdout, issues to stderr in cargo-style format.
//! Separate from core logic to allow transloc to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ExportSummary, LedgerOutcome, LocaleExport, TransformStats};
use crate::issues::{Issue, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Arrow printed before each locale header.
const LOCALE_MARK: &str = "\u{2192}"; // →

/// Bullet printed before each written file.
const FILE_MARK: &str = "\u{2022}"; // •

/// Length of the hash prefix shown in verbose output.
const SHORT_HASH_LEN: usize = 12;

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Export(summary) => {
            print_export_to(summary, verbose, &mut io::stdout().lock());
            report_to(&result.issues, &mut io::stderr().lock());
            print_export_summary_to(summary, result.issues.len(), &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print issues in cargo-style format, in the order given. The export
/// summary already holds them sorted by path.
///
/// Generic over the writer so tests can capture output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        print_issue(issue, writer);
    }
}

/// Print the per-locale progress of an export run.
pub fn print_export_to<W: Write>(summary: &ExportSummary, verbose: bool, writer: &mut W) {
    for locale in &summary.locales {
        print_locale(locale, verbose, writer);
    }
}

/// Print the closing line of an export run.
pub fn print_export_summary_to<W: Write>(
    summary: &ExportSummary,
    issue_count: usize,
    writer: &mut W,
) {
    let files = summary.files_written();
    let locales = summary.locales.len();
    let exported = format!(
        "Exported {} {} across {} {}",
        files,
        plural(files, "file", "files"),
        locales,
        plural(locales, "locale", "locales")
    );

    let _ = if issue_count == 0 {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), exported.green())
    } else {
        writeln!(
            writer,
            "{} {}, {} {}",
            FAILURE_MARK.red(),
            exported,
            issue_count,
            plural(issue_count, "problem", "problems").yellow()
        )
    };
}

// ============================================================
// Internal Functions
// ============================================================

fn print_locale<W: Write>(locale: &LocaleExport, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Exporting locale: {}",
        LOCALE_MARK.blue(),
        locale.locale.bold()
    );

    let name_width = locale
        .files
        .iter()
        .map(|file| UnicodeWidthStr::width(file.output.as_str()))
        .max()
        .unwrap_or(0);

    for file in &locale.files {
        if verbose {
            let padding = name_width - UnicodeWidthStr::width(file.output.as_str());
            let _ = writeln!(
                writer,
                "   {} {}{:padding$}  {}",
                FILE_MARK,
                file.output,
                "",
                format_stats(&file.stats).dimmed(),
                padding = padding
            );
        } else {
            let _ = writeln!(writer, "   {} {}", FILE_MARK, file.output);
        }
    }

    if !verbose {
        return;
    }

    if locale.ignored_count > 0 {
        let _ = writeln!(
            writer,
            "   {} {} ignored",
            "=".blue(),
            locale.ignored_count
        );
    }

    if let Some(update) = &locale.ledger {
        let outcome = match update.outcome {
            LedgerOutcome::Created => "created".green(),
            LedgerOutcome::Changed => "changed".yellow(),
            LedgerOutcome::Unchanged => "unchanged".dimmed(),
        };
        let short_hash: String = update.hash.chars().take(SHORT_HASH_LEN).collect();
        let _ = writeln!(
            writer,
            "   {} {} {} ({})",
            "=".blue(),
            "version:".bold(),
            short_hash,
            outcome
        );
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}  {}",
        "warning:".bold().yellow(),
        issue.message(),
        issue.kind().to_string().dimmed().cyan()
    );

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }
}

fn format_stats(stats: &TransformStats) -> String {
    let mut parts = vec![format!("{} {}", stats.plain, plural(stats.plain, "string", "strings"))];
    if stats.simple_plurals > 0 {
        parts.push(format!(
            "{} {}",
            stats.simple_plurals,
            plural(stats.simple_plurals, "plural", "plurals")
        ));
    }
    if stats.choices > 0 {
        parts.push(format!(
            "{} {}",
            stats.choices,
            plural(stats.choices, "choice", "choices")
        ));
    }
    if stats.passthrough > 0 {
        parts.push(format!("{} other", stats.passthrough));
    }
    parts.join(", ")
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
