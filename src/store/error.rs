use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::data::{CollectionId, ModeId, VariableId};

/// Failure at the store boundary. Any of these aborts a sync run.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("collection not found: {0}")]
    UnknownCollection(CollectionId),

    #[error("mode {mode} not found in collection {collection}")]
    UnknownMode {
        collection: CollectionId,
        mode: ModeId,
    },

    #[error("variable not found: {0}")]
    UnknownVariable(VariableId),

    #[error("store rejected the operation: {0}")]
    Rejected(String),

    #[error("failed to access store file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid store file {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
