//! Synchronization of parsed collections into a variable store.
//!
//! - `engine`: Two-pass create/assign algorithm
//! - `status`: Terminal status reported to the host

mod engine;
mod status;

pub use engine::{SyncOptions, SyncSummary, synchronize};
pub use status::{SyncStatus, success_message, sync_document};
