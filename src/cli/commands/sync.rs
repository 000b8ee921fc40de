use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::SyncCommand;
use super::{CommandResult, CommandSummary, SyncReport, helper::CommandContext, helper::read_source};
use crate::core::{SyncOptions, sync_document};
use crate::store::MemoryStore;

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load()?;
    let input = ctx.input_path(&cmd.common);
    let store_path = cmd
        .store
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.store));
    let options = SyncOptions {
        alias_scope: cmd.alias_scope.unwrap_or(ctx.config.alias_scope),
        merge_collections: ctx.merge_collections(&cmd.common),
    };
    debug!(
        input = %input.display(),
        store = %store_path.display(),
        config_from_file = ctx.config_from_file,
        ?options,
        "starting sync"
    );

    let text = read_source(&input)?;
    let mut store = MemoryStore::load(&store_path)?;

    let (status, summary) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(sync_document(&text, &mut store, options));

    // A failed run keeps whatever it already wrote.
    store
        .save(&store_path)
        .with_context(|| format!("Failed to write store: {}", store_path.display()))?;
    debug!(
        store = %store_path.display(),
        collections = store.collection_records().len(),
        variables = store.variable_records().len(),
        "store saved"
    );

    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncReport {
            input,
            store: store_path,
            status,
            summary,
            strict: cmd.strict,
        }),
    })
}
