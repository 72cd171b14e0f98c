/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and any reported issues
/// - `Err` if the command fails (unknown locale, missing source directory,
///   invalid config, write errors)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, export::export, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
