//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` describing what the command did
//! - `Err` if the command could not run (config error, unreadable input, store file error)
//!
//! A sync run that fails at the store boundary still returns `Ok`; its
//! status carries the error message.
use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{init::init, parse::parse, sync::sync},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Parse(cmd)) => parse(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
