//! Core data types shared by the parser, the resolver and the sync engine.
//!
//! ## Module Structure
//!
//! - `collection`: Parsed document structure (Collection, Mode, VariableDef)
//! - `handle`: Store handles (CollectionId, ModeId, VariableId)
//! - `value`: Token kinds and resolved values (TokenType, Rgba, TypedValue)

pub mod collection;
pub mod handle;
pub mod value;

pub use collection::{Collection, Mode, VariableDef};
pub use handle::{CollectionId, ModeId, VariableId};
pub use value::{Rgba, TokenType, TypedValue};
