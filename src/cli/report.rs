//! Report formatting and printing utilities.
//!
//! Separate from the engine so tokensync can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ParseReport, SyncReport};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Collection, SyncStatus, infer_type};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Sync(report) => match report.status {
            SyncStatus::Success(_) => print_sync_to(report, verbose, &mut io::stdout().lock()),
            SyncStatus::Error(_) => print_sync_to(report, verbose, &mut io::stderr().lock()),
        },
        CommandSummary::Parse(report) => print_parse_to(report, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Print the terminal status of a sync run.
pub fn print_sync_to<W: Write>(report: &SyncReport, verbose: bool, writer: &mut W) {
    match &report.status {
        SyncStatus::Success(message) => {
            let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
        }
        SyncStatus::Error(message) => {
            let _ = writeln!(
                writer,
                "{} {} {}",
                FAILURE_MARK.red(),
                "sync failed:".bold().red(),
                message
            );
        }
    }

    if verbose {
        let _ = writeln!(
            writer,
            "  {} {} {} {}",
            "-->".blue(),
            report.input.display(),
            "=>".dimmed(),
            report.store.display()
        );
    }
}

/// Print parsed collections, either as an indented tree or as JSON.
pub fn print_parse_to<W: Write>(report: &ParseReport, writer: &mut W) {
    if report.json {
        match serde_json::to_string_pretty(&report.collections) {
            Ok(json) => {
                let _ = writeln!(writer, "{}", json);
            }
            Err(err) => {
                let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), err);
            }
        }
        return;
    }

    if report.collections.is_empty() {
        let _ = writeln!(
            writer,
            "{} no collections found in {}",
            "warning:".bold().yellow(),
            report.input.display()
        );
        return;
    }

    for collection in &report.collections {
        print_collection(collection, writer);
    }
}

fn print_collection<W: Write>(collection: &Collection, writer: &mut W) {
    let _ = writeln!(writer, "{}", collection.name.bold());
    for mode in &collection.modes {
        let _ = writeln!(
            writer,
            "  {} ({} {})",
            mode.name.cyan(),
            mode.variables.len(),
            if mode.variables.len() == 1 {
                "variable"
            } else {
                "variables"
            }
        );
        for def in &mode.variables {
            let _ = writeln!(
                writer,
                "    --{}: {}  {}",
                def.name,
                def.raw_value,
                format!("[{}]", infer_type(&def.raw_value)).dimmed()
            );
        }
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
