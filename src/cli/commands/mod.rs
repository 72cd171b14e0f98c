pub mod export;
pub mod init;

use crate::core::ExportSummary;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running transloc commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, exit code 1 should be returned when issues were found.
    pub exit_on_issues: bool,
    /// Recoverable problems reported during the command.
    pub issues: Vec<Issue>,
}
