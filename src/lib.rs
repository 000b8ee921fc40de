//! tokensync - design tokens from annotated CSS into a variable store
//!
//! tokensync reads CSS custom properties grouped by structural comments
//! (`/* Collection name: … */`, `/* Mode: … */`), infers a type for every
//! value, resolves `var(--…)` references into aliases, and synchronizes the
//! result into a variable store. Re-running on unchanged input creates
//! nothing new.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Token engine (parser, inference, resolution, sync)
//! - `store`: Variable store interface and the JSON-backed in-memory store

pub mod cli;
pub mod config;
pub mod core;
pub mod store;
