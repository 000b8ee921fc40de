use std::fmt;

use serde::{Deserialize, Serialize};

use super::handle::VariableId;

/// Semantic kind of a token, decided from its raw text.
///
/// This is also the type a variable is created with in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Color,
    Number,
    Text,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Color => write!(f, "color"),
            TokenType::Number => write!(f, "number"),
            TokenType::Text => write!(f, "text"),
        }
    }
}

/// A color with channels normalized to `0.0..=1.0`.
///
/// `a` is only present when the source carried an alpha channel
/// (`#rrggbbaa` or `rgba(...)`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }
}

/// A resolved token value, ready to be written for one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum TypedValue {
    Color(Rgba),
    Number(f64),
    Text(String),
    /// Reference to another store variable.
    Alias(VariableId),
}
