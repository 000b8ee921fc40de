//! Core token engine.
//!
//! Data flows leaf-first:
//!
//! ```text
//! text ─▶ parsers ─▶ [Collection] ─▶ sync ─▶ VariableStore
//!                                     │
//!                                     ├─ infer    (raw → TokenType)
//!                                     └─ resolve  (raw → TypedValue, uses color + registry)
//! ```
//!
//! ## Module Structure
//!
//! - `color`: Hex / rgb / rgba decoding
//! - `data`: Shared data types
//! - `infer`: Type inference for raw values
//! - `parsers`: Annotated CSS parser
//! - `registry`: Alias registry and its scoping policy
//! - `resolve`: Raw value resolution
//! - `sync`: Two-pass synchronization engine

pub mod color;
pub mod data;
pub mod infer;
pub mod parsers;
pub mod registry;
pub mod resolve;
pub mod sync;

pub use data::{
    Collection, CollectionId, Mode, ModeId, Rgba, TokenType, TypedValue, VariableDef, VariableId,
};
pub use infer::infer_type;
pub use parsers::parse;
pub use registry::{AliasRegistry, AliasScope};
pub use resolve::resolve;
pub use sync::{SyncOptions, SyncStatus, SyncSummary, sync_document, synchronize};
