use std::path::PathBuf;

use crate::core::{Collection, SyncStatus, SyncSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncReport),
    Parse(ParseReport),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncReport {
    pub input: PathBuf,
    pub store: PathBuf,
    pub status: SyncStatus,
    /// Present when the run completed.
    pub summary: Option<SyncSummary>,
    /// Unresolved aliases count as a failure.
    pub strict: bool,
}

#[derive(Debug)]
pub struct ParseReport {
    pub input: PathBuf,
    pub collections: Vec<Collection>,
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tokensync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
