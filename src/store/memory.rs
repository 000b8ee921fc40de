use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::{StoreCollection, StoreError, StoreMode, StoreVariable, VariableStore};
use crate::core::data::{CollectionId, ModeId, TokenType, TypedValue, VariableId};

/// Name given to the mode every new collection starts with.
pub const INITIAL_MODE_NAME: &str = "Mode 1";

/// A [`VariableStore`] held in memory, persistable as a JSON document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStore {
    #[serde(default)]
    collections: Vec<StoreCollection>,
    #[serde(default)]
    variables: Vec<StoreVariable>,
    #[serde(default)]
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json + "\n").map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn collection_records(&self) -> &[StoreCollection] {
        &self.collections
    }

    pub fn variable_records(&self) -> &[StoreVariable] {
        &self.variables
    }

    pub fn collection_named(&self, name: &str) -> Option<&StoreCollection> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn variable_named(&self, collection: &CollectionId, name: &str) -> Option<&StoreVariable> {
        self.variables
            .iter()
            .find(|v| &v.collection_id == collection && v.name == name)
    }

    fn next(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}:{}", prefix, self.next_id)
    }

    fn collection_mut(&mut self, id: &CollectionId) -> Result<&mut StoreCollection, StoreError> {
        self.collections
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::UnknownCollection(id.clone()))
    }
}

impl VariableStore for MemoryStore {
    async fn collections(&self) -> Result<Vec<StoreCollection>, StoreError> {
        Ok(self.collections.clone())
    }

    async fn variables(&self) -> Result<Vec<StoreVariable>, StoreError> {
        Ok(self.variables.clone())
    }

    async fn create_collection(&mut self, name: &str) -> Result<StoreCollection, StoreError> {
        let id = CollectionId::new(self.next("VariableCollectionId"));
        let mode_id = ModeId::new(self.next("ModeId"));
        let collection = StoreCollection {
            id,
            name: name.to_string(),
            modes: vec![StoreMode {
                mode_id: mode_id.clone(),
                name: INITIAL_MODE_NAME.to_string(),
            }],
            default_mode_id: mode_id,
        };
        self.collections.push(collection.clone());
        Ok(collection)
    }

    async fn rename_mode(
        &mut self,
        collection: &CollectionId,
        mode: &ModeId,
        name: &str,
    ) -> Result<(), StoreError> {
        let record = self.collection_mut(collection)?;
        let entry = record
            .modes
            .iter_mut()
            .find(|m| &m.mode_id == mode)
            .ok_or_else(|| StoreError::UnknownMode {
                collection: collection.clone(),
                mode: mode.clone(),
            })?;
        entry.name = name.to_string();
        Ok(())
    }

    async fn add_mode(
        &mut self,
        collection: &CollectionId,
        name: &str,
    ) -> Result<ModeId, StoreError> {
        // Validate before allocating so a failed call leaves ids untouched.
        self.collection_mut(collection)?;
        let mode_id = ModeId::new(self.next("ModeId"));
        self.collection_mut(collection)?.modes.push(StoreMode {
            mode_id: mode_id.clone(),
            name: name.to_string(),
        });
        Ok(mode_id)
    }

    async fn create_variable(
        &mut self,
        name: &str,
        collection: &CollectionId,
        ty: TokenType,
    ) -> Result<StoreVariable, StoreError> {
        self.collection_mut(collection)?;
        let variable = StoreVariable {
            id: VariableId::new(self.next("VariableID")),
            name: name.to_string(),
            collection_id: collection.clone(),
            resolved_type: ty,
            values_by_mode: Default::default(),
        };
        self.variables.push(variable.clone());
        Ok(variable)
    }

    async fn set_value(
        &mut self,
        variable: &VariableId,
        mode: &ModeId,
        value: TypedValue,
    ) -> Result<(), StoreError> {
        if let TypedValue::Alias(target) = &value
            && !self.variables.iter().any(|v| &v.id == target)
        {
            return Err(StoreError::UnknownVariable(target.clone()));
        }

        let index = self
            .variables
            .iter()
            .position(|v| &v.id == variable)
            .ok_or_else(|| StoreError::UnknownVariable(variable.clone()))?;

        let collection_id = self.variables[index].collection_id.clone();
        let owns_mode = self
            .collections
            .iter()
            .find(|c| c.id == collection_id)
            .is_some_and(|c| c.modes.iter().any(|m| &m.mode_id == mode));
        if !owns_mode {
            return Err(StoreError::UnknownMode {
                collection: collection_id,
                mode: mode.clone(),
            });
        }

        self.variables[index]
            .values_by_mode
            .insert(mode.clone(), value);
        Ok(())
    }
}
