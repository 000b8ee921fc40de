//! Source parsers.
//!
//! - `annotations`: Annotated CSS custom properties → ordered collections

pub mod annotations;

pub use annotations::{merge_repeated, parse};
