use std::{env, path::Path};

use anyhow::{Context, Ok, Result};

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::{ConfigLoadResult, load_config, resolve_path},
    core::{self, EmptyBuckets, ExportOptions, TransformOptions},
};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let loaded = load_config(&cwd)?;
    let options = build_options(&cmd, &loaded, &cwd)?;

    let mut summary = core::export(&options, cmd.locale.as_deref())?;
    let issues = std::mem::take(&mut summary.issues);

    Ok(CommandResult {
        summary: CommandSummary::Export(summary),
        exit_on_issues: cmd.strict,
        issues,
    })
}

/// Merge CLI flags over the loaded config. CLI paths are relative to the
/// working directory, config paths to the config file's directory.
pub fn build_options(
    cmd: &ExportCommand,
    loaded: &ConfigLoadResult,
    cwd: &Path,
) -> Result<ExportOptions> {
    let config = &loaded.config;
    let base_dir = &loaded.base_dir;

    let source_root = match &cmd.common.source_root {
        Some(path) => cwd.join(path),
        None => resolve_path(base_dir, &config.source_root),
    };
    let output_root = match &cmd.common.output_root {
        Some(path) => cwd.join(path),
        None => resolve_path(base_dir, &config.output_root),
    };

    let ledger_file = if cmd.no_versions || !config.versions {
        None
    } else if let Some(path) = &cmd.ledger_file {
        Some(cwd.join(path))
    } else if config.ledger_file.is_none() && cmd.common.output_root.is_some() {
        // The default ledger follows an overridden output root.
        Some(output_root.join(core::ledger::DEFAULT_LEDGER_FILE_NAME))
    } else {
        Some(resolve_path(base_dir, &config.ledger_file()))
    };

    let empty_buckets = if cmd.drop_empty_buckets || config.drop_empty_buckets {
        EmptyBuckets::Drop
    } else {
        EmptyBuckets::Keep
    };

    Ok(ExportOptions {
        source_root,
        output_root,
        ledger_file,
        ignores: config.ignore_patterns()?,
        transform: TransformOptions { empty_buckets },
    })
}
