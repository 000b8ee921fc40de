use std::fmt;

use crate::core::parsers::{merge_repeated, parse};
use crate::store::VariableStore;

use super::engine::{SyncOptions, SyncSummary, synchronize};

/// The single completion signal reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    Success(String),
    Error(String),
}

impl SyncStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncStatus::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            SyncStatus::Success(message) | SyncStatus::Error(message) => message,
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Human readable one-line description of a completed run.
pub fn success_message(summary: &SyncSummary) -> String {
    let mut message = format!(
        "Synchronized {} {} ({} created), {} {} created, {} {} created, {} {} set",
        summary.collections_created + summary.collections_reused,
        plural(
            summary.collections_created + summary.collections_reused,
            "collection"
        ),
        summary.collections_created,
        summary.modes_created,
        plural(summary.modes_created, "mode"),
        summary.variables_created,
        plural(summary.variables_created, "variable"),
        summary.values_set,
        plural(summary.values_set, "value"),
    );
    if summary.unresolved_aliases > 0 {
        message.push_str(&format!(
            ", {} unresolved {}",
            summary.unresolved_aliases,
            plural(summary.unresolved_aliases, "alias")
        ));
    }
    message
}

fn plural(count: usize, word: &str) -> String {
    match (count, word) {
        (1, _) => word.to_string(),
        (_, "alias") => "aliases".to_string(),
        _ => format!("{}s", word),
    }
}

/// Parse `text` and synchronize it into `store`, reporting one terminal status.
///
/// Returns the run summary alongside the status when the run succeeded.
pub async fn sync_document<S: VariableStore>(
    text: &str,
    store: &mut S,
    options: SyncOptions,
) -> (SyncStatus, Option<SyncSummary>) {
    let mut collections = parse(text);
    if options.merge_collections {
        collections = merge_repeated(collections);
    }

    match synchronize(&collections, store, options).await {
        Ok(summary) => (SyncStatus::Success(success_message(&summary)), Some(summary)),
        Err(err) => (SyncStatus::Error(err.to_string()), None),
    }
}
