//! Recoverable problems found during an export.
//!
//! None of these stop the run. Each one carries what the reporter needs to
//! tell the user which file was affected and why.

use enum_dispatch::enum_dispatch;

use crate::core::parsers::LoadError;

/// Identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueKind {
    SkippedFile,
    InaccessiblePath,
    OutputConflict,
    InvalidLedger,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::SkippedFile => write!(f, "skipped-file"),
            IssueKind::InaccessiblePath => write!(f, "inaccessible-path"),
            IssueKind::OutputConflict => write!(f, "output-conflict"),
            IssueKind::InvalidLedger => write!(f, "invalid-ledger"),
        }
    }
}

/// A source file that could not be loaded and was left out of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFileIssue {
    pub locale: String,
    pub file_path: String,
    pub reason: String,
}

impl SkippedFileIssue {
    pub fn new(locale: &str, file_path: impl Into<String>, err: &LoadError) -> Self {
        Self {
            locale: locale.to_string(),
            file_path: file_path.into(),
            reason: err.to_string(),
        }
    }
}

/// A directory entry the scanner could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InaccessiblePathIssue {
    pub locale: String,
    pub path: String,
    pub error: String,
}

/// Two source files that map to the same output file (`auth.json` and
/// `auth.toml`). The first in path order wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConflictIssue {
    pub locale: String,
    pub file_path: String,
    pub output_path: String,
    pub written_from: String,
}

/// The ledger file existed but could not be parsed; it was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLedgerIssue {
    pub ledger_path: String,
}

/// An issue found during export.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    SkippedFile(SkippedFileIssue),
    InaccessiblePath(InaccessiblePathIssue),
    OutputConflict(OutputConflictIssue),
    InvalidLedger(InvalidLedgerIssue),
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.path()
            .cmp(other.path())
            .then_with(|| self.kind().cmp(&other.kind()))
    }
}

/// Trait for types that can be reported to the CLI.
#[enum_dispatch]
pub trait Report {
    /// File or directory the issue refers to.
    fn path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn kind(&self) -> IssueKind;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for SkippedFileIssue {
    fn path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("skipped {} ({})", self.file_path, self.reason)
    }

    fn kind(&self) -> IssueKind {
        IssueKind::SkippedFile
    }

    fn hint(&self) -> Option<&str> {
        if self.reason.starts_with("unsupported file type") {
            Some("add a pattern to 'ignores' in .translocrc.json to silence this")
        } else {
            None
        }
    }
}

impl Report for InaccessiblePathIssue {
    fn path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!("cannot access {}: {}", self.path, self.error)
    }

    fn kind(&self) -> IssueKind {
        IssueKind::InaccessiblePath
    }
}

impl Report for OutputConflictIssue {
    fn path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!(
            "skipped {} ({} was already written from {})",
            self.file_path, self.output_path, self.written_from
        )
    }

    fn kind(&self) -> IssueKind {
        IssueKind::OutputConflict
    }

    fn hint(&self) -> Option<&str> {
        Some("keep only one source file per namespace")
    }
}

impl Report for InvalidLedgerIssue {
    fn path(&self) -> &str {
        &self.ledger_path
    }

    fn message(&self) -> String {
        format!(
            "{} was not a valid version ledger and has been rewritten",
            self.ledger_path
        )
    }

    fn kind(&self) -> IssueKind {
        IssueKind::InvalidLedger
    }
}
