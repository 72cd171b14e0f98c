//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Convert translation files into i18next JSON resources
//! - `init`: Initialize a transloc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read translation files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory with one subdirectory per locale (overrides config file)
    #[arg(long, env = "TRANSLOC_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Directory to write JSON resources to (overrides config file)
    #[arg(long, env = "TRANSLOC_OUTPUT_ROOT")]
    pub output_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Locale to export (default: every locale found in the source directory)
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Version ledger file (overrides config file)
    #[arg(long)]
    pub ledger_file: Option<PathBuf>,

    /// Do not update the version ledger
    #[arg(long)]
    pub no_versions: bool,

    /// Omit empty `_zero`/`_one` keys produced by choice syntax
    #[arg(long)]
    pub drop_empty_buckets: bool,

    /// Exit with status 1 if any file was skipped or another problem was reported
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert translation files into i18next JSON resources
    Export(ExportCommand),
    /// Initialize a new .translocrc.json configuration file
    Init,
}
