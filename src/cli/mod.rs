//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: Command handlers (sync, parse, init)
//! - `exit_status`: Process exit status
//! - `report`: Terminal output

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod exit_code;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, ParseCommand, SyncCommand};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result).into())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or this
/// crate's debug events when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,tokensync=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
