//! The variable store the sync engine writes into.
//!
//! The engine only talks to a store through [`VariableStore`]. Every call is
//! a suspension point and is awaited before the next step runs.
//!
//! ## Module Structure
//!
//! - `error`: StoreError
//! - `memory`: In-memory store with JSON file persistence

mod error;
mod memory;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::data::{CollectionId, ModeId, TokenType, TypedValue, VariableId};

pub use error::StoreError;
pub use memory::MemoryStore;

/// A mode as the store knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreMode {
    pub mode_id: ModeId,
    pub name: String,
}

/// A collection as the store knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCollection {
    pub id: CollectionId,
    pub name: String,
    pub modes: Vec<StoreMode>,
    pub default_mode_id: ModeId,
}

impl StoreCollection {
    pub fn mode_named(&self, name: &str) -> Option<&StoreMode> {
        self.modes.iter().find(|mode| mode.name == name)
    }
}

/// A variable as the store knows it, with its per-mode values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreVariable {
    pub id: VariableId,
    pub name: String,
    pub collection_id: CollectionId,
    pub resolved_type: TokenType,
    #[serde(default)]
    pub values_by_mode: BTreeMap<ModeId, TypedValue>,
}

impl StoreVariable {
    pub fn value_for(&self, mode: &ModeId) -> Option<&TypedValue> {
        self.values_by_mode.get(mode)
    }
}

/// Capabilities the sync engine needs from a store.
///
/// Implementations decide how ids are issued and what is persisted. A new
/// collection must come with exactly one initial mode, reported as its
/// `default_mode_id`.
#[allow(async_fn_in_trait)]
pub trait VariableStore {
    async fn collections(&self) -> Result<Vec<StoreCollection>, StoreError>;

    async fn variables(&self) -> Result<Vec<StoreVariable>, StoreError>;

    async fn create_collection(&mut self, name: &str) -> Result<StoreCollection, StoreError>;

    async fn rename_mode(
        &mut self,
        collection: &CollectionId,
        mode: &ModeId,
        name: &str,
    ) -> Result<(), StoreError>;

    async fn add_mode(
        &mut self,
        collection: &CollectionId,
        name: &str,
    ) -> Result<ModeId, StoreError>;

    async fn create_variable(
        &mut self,
        name: &str,
        collection: &CollectionId,
        ty: TokenType,
    ) -> Result<StoreVariable, StoreError>;

    async fn set_value(
        &mut self,
        variable: &VariableId,
        mode: &ModeId,
        value: TypedValue,
    ) -> Result<(), StoreError>;
}
