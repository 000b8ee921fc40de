//! Two-pass synchronization of parsed collections into a [`VariableStore`].
//!
//! For each collection:
//!
//! 1. Locate the store collection by name, or create it and rename its
//!    initial mode after the first declared mode.
//! 2. Locate or add each declared mode.
//! 3. Pass 1 creates (or finds) every variable of the mode and registers its
//!    handle, producing a [`RegisteredMode`].
//! 4. Pass 2 consumes the [`RegisteredMode`], resolves each value against the
//!    registry and writes it.
//!
//! Pass 2 only accepts the output of pass 1, so every variable of a mode is
//! registered before any of its values is resolved. References to variables
//! declared later in the same mode therefore resolve.
//!
//! Store errors abort the run immediately. Nothing is rolled back.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::data::{Collection, Mode, ModeId, VariableDef, VariableId};
use crate::core::infer::infer_type;
use crate::core::registry::{AliasRegistry, AliasScope};
use crate::core::resolve::resolve;
use crate::store::{StoreCollection, StoreError, StoreMode, VariableStore};

/// Tunables for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub alias_scope: AliasScope,
    /// Fold same-named collection blocks together before syncing.
    pub merge_collections: bool,
}

/// Counts of what one run did to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub collections_created: usize,
    pub collections_reused: usize,
    pub modes_created: usize,
    pub modes_reused: usize,
    pub variables_created: usize,
    pub values_set: usize,
    /// References whose target was not registered; left without a value.
    pub unresolved_aliases: usize,
}

impl SyncSummary {
    /// True when the run created nothing new in the store.
    pub fn is_noop_structure(&self) -> bool {
        self.collections_created == 0 && self.modes_created == 0 && self.variables_created == 0
    }
}

/// A variable definition bound to its store handle.
#[derive(Debug)]
struct Binding<'a> {
    def: &'a VariableDef,
    id: VariableId,
}

/// Output of pass 1 for one mode: every variable is created and registered.
#[derive(Debug)]
struct RegisteredMode<'a> {
    mode_id: ModeId,
    bindings: Vec<Binding<'a>>,
}

/// Synchronize collections into `store`.
///
/// Re-running with the same input against the resulting store creates no
/// new collections, modes or variables.
pub async fn synchronize<S: VariableStore>(
    collections: &[Collection],
    store: &mut S,
    options: SyncOptions,
) -> Result<SyncSummary, StoreError> {
    let mut engine = SyncEngine::new(store, options.alias_scope);
    for collection in collections {
        engine.sync_collection(collection).await?;
    }

    let SyncEngine {
        registry, summary, ..
    } = engine;
    if summary.is_noop_structure() {
        info!(values = summary.values_set, "store structure already up to date");
    }
    if !registry.is_empty() {
        debug!(
            scope = ?registry.scope(),
            handles = registry.len(),
            "alias registry released"
        );
    }
    Ok(summary)
}

struct SyncEngine<'s, S> {
    store: &'s mut S,
    registry: AliasRegistry,
    summary: SyncSummary,
}

impl<'s, S: VariableStore> SyncEngine<'s, S> {
    fn new(store: &'s mut S, scope: AliasScope) -> Self {
        Self {
            store,
            registry: AliasRegistry::new(scope),
            summary: SyncSummary::default(),
        }
    }

    async fn sync_collection(&mut self, collection: &Collection) -> Result<(), StoreError> {
        info!(
            collection = %collection.name,
            modes = collection.modes.len(),
            variables = collection.variable_count(),
            "syncing collection"
        );

        let (mut record, adopted_mode) = self.locate_or_create_collection(collection).await?;

        let mut known: HashMap<String, VariableId> = HashMap::new();
        for variable in self.store.variables().await? {
            if variable.collection_id == record.id {
                known.entry(variable.name).or_insert(variable.id);
            }
        }

        for (index, mode) in collection.modes.iter().enumerate() {
            let mode_id = match (index, &adopted_mode) {
                // Already renamed to this mode's name when the collection was created.
                (0, Some(initial)) => initial.clone(),
                _ => self.locate_or_create_mode(&mut record, &mode.name).await?,
            };

            let registered = self
                .register_variables(&record, &collection.name, mode_id, mode, &mut known)
                .await?;
            self.assign_values(&collection.name, registered).await?;
        }

        Ok(())
    }

    /// Returns the store collection, plus the id of its initial mode when the
    /// collection was created by this call and that mode was adopted as the
    /// first declared mode.
    async fn locate_or_create_collection(
        &mut self,
        collection: &Collection,
    ) -> Result<(StoreCollection, Option<ModeId>), StoreError> {
        let existing = self
            .store
            .collections()
            .await?
            .into_iter()
            .find(|c| c.name == collection.name);

        if let Some(record) = existing {
            debug!(collection = %record.name, id = %record.id, "reusing collection");
            self.summary.collections_reused += 1;
            return Ok((record, None));
        }

        let mut record = self.store.create_collection(&collection.name).await?;
        debug!(collection = %record.name, id = %record.id, "created collection");
        self.summary.collections_created += 1;

        let Some(first) = collection.default_mode_name() else {
            return Ok((record, None));
        };

        let initial = record.default_mode_id.clone();
        self.store.rename_mode(&record.id, &initial, first).await?;
        if let Some(mode) = record.modes.iter_mut().find(|m| m.mode_id == initial) {
            mode.name = first.to_string();
        }
        debug!(mode = first, id = %initial, "renamed initial mode");
        self.summary.modes_created += 1;

        Ok((record, Some(initial)))
    }

    async fn locate_or_create_mode(
        &mut self,
        record: &mut StoreCollection,
        name: &str,
    ) -> Result<ModeId, StoreError> {
        if let Some(mode) = record.mode_named(name) {
            debug!(mode = name, id = %mode.mode_id, "reusing mode");
            self.summary.modes_reused += 1;
            return Ok(mode.mode_id.clone());
        }

        let mode_id = self.store.add_mode(&record.id, name).await?;
        debug!(mode = name, id = %mode_id, "added mode");
        record.modes.push(StoreMode {
            mode_id: mode_id.clone(),
            name: name.to_string(),
        });
        self.summary.modes_created += 1;
        Ok(mode_id)
    }

    /// Pass 1: find or create every variable of the mode and register it.
    async fn register_variables<'m>(
        &mut self,
        record: &StoreCollection,
        collection_name: &str,
        mode_id: ModeId,
        mode: &'m Mode,
        known: &mut HashMap<String, VariableId>,
    ) -> Result<RegisteredMode<'m>, StoreError> {
        let mut bindings = Vec::with_capacity(mode.variables.len());

        for def in &mode.variables {
            let id = match known.get(&def.name) {
                Some(id) => id.clone(),
                None => {
                    let ty = infer_type(&def.raw_value);
                    let created = self.store.create_variable(&def.name, &record.id, ty).await?;
                    debug!(variable = %def.name, id = %created.id, %ty, "created variable");
                    self.summary.variables_created += 1;
                    known.insert(def.name.clone(), created.id.clone());
                    created.id
                }
            };

            if let Some(previous) = self.registry.register(collection_name, &def.name, id.clone())
                && previous != id
            {
                debug!(variable = %def.name, %previous, current = %id, "alias target replaced");
            }
            bindings.push(Binding { def, id });
        }

        Ok(RegisteredMode { mode_id, bindings })
    }

    /// Pass 2: resolve and write every value of a registered mode.
    async fn assign_values(
        &mut self,
        collection_name: &str,
        registered: RegisteredMode<'_>,
    ) -> Result<(), StoreError> {
        let RegisteredMode { mode_id, bindings } = registered;

        for Binding { def, id } in bindings {
            let ty = infer_type(&def.raw_value);
            let resolved = resolve(&def.raw_value, ty, &self.registry.scoped(collection_name));

            match resolved {
                Some(value) => {
                    self.store.set_value(&id, &mode_id, value).await?;
                    self.summary.values_set += 1;
                }
                None => {
                    warn!(
                        variable = %def.name,
                        value = %def.raw_value,
                        mode = %mode_id,
                        "unresolved alias, no value set"
                    );
                    self.summary.unresolved_aliases += 1;
                }
            }
        }

        Ok(())
    }
}
