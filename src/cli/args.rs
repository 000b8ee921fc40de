//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Parse a token source and synchronize it into the store file
//! - `parse`: Print the parsed collection tree without touching the store
//! - `init`: Initialize a tokensync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::AliasScope;

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
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Parse(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Token source file (overrides config file)
    pub input: Option<PathBuf>,

    /// Merge repeated `Collection name:` blocks before processing (overrides config file)
    #[arg(long)]
    pub merge_collections: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Store file to synchronize into (overrides config file)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// How alias references are matched across collections (overrides config file)
    #[arg(long, value_enum)]
    pub alias_scope: Option<AliasScope>,

    /// Exit with status 1 when any alias could not be resolved
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ParseCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the collections as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synchronize annotated CSS tokens into the variable store
    Sync(SyncCommand),
    /// Print the collections, modes and variables found in a token source
    Parse(ParseCommand),
    /// Initialize a new .tokensyncrc.json configuration file
    Init,
}
