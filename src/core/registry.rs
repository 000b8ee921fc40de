//! Alias registry: variable name → store handle, filled during pass 1.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::data::VariableId;

/// How alias targets are looked up across collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AliasScope {
    /// Keyed by bare variable name. A later collection declaring the same
    /// name replaces the earlier handle for every subsequent lookup.
    #[default]
    Global,
    /// Keyed by collection name and variable name. References only resolve
    /// to variables of the same collection.
    Collection,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RegistryKey {
    collection: Option<String>,
    name: String,
}

/// Handles registered during one synchronization run.
///
/// A registry is never persisted; each run starts empty.
#[derive(Debug, Default)]
pub struct AliasRegistry {
    scope: AliasScope,
    entries: HashMap<RegistryKey, VariableId>,
}

impl AliasRegistry {
    pub fn new(scope: AliasScope) -> Self {
        Self {
            scope,
            entries: HashMap::new(),
        }
    }

    pub fn scope(&self) -> AliasScope {
        self.scope
    }

    fn key(&self, collection: &str, name: &str) -> RegistryKey {
        RegistryKey {
            collection: match self.scope {
                AliasScope::Global => None,
                AliasScope::Collection => Some(collection.to_string()),
            },
            name: name.to_string(),
        }
    }

    /// Register a handle. Returns the handle it replaced, if any.
    pub fn register(&mut self, collection: &str, name: &str, id: VariableId) -> Option<VariableId> {
        let key = self.key(collection, name);
        self.entries.insert(key, id)
    }

    pub fn lookup(&self, collection: &str, name: &str) -> Option<&VariableId> {
        self.entries.get(&self.key(collection, name))
    }

    /// View of the registry as seen from one collection.
    pub fn scoped<'a>(&'a self, collection: &'a str) -> ScopedRegistry<'a> {
        ScopedRegistry {
            registry: self,
            collection,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry lookups on behalf of a single collection.
#[derive(Debug, Clone, Copy)]
pub struct ScopedRegistry<'a> {
    registry: &'a AliasRegistry,
    collection: &'a str,
}

impl ScopedRegistry<'_> {
    pub fn lookup(&self, name: &str) -> Option<&VariableId> {
        self.registry.lookup(self.collection, name)
    }
}
