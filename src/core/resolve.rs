//! Raw value → [`TypedValue`] resolution.
//!
//! Literals are converted according to their inferred [`TokenType`].
//! `var(--name)` references become aliases when `name` is already in the
//! registry, and resolve to nothing otherwise.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::color;
use crate::core::data::{TokenType, TypedValue};
use crate::core::infer::REFERENCE_PREFIX;
use crate::core::registry::ScopedRegistry;

// Leading numeric prefix, the way CSS tooling reads `12px` or `1.5e2rem`.
static NUMERIC_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// Resolve a raw value for one mode.
///
/// Returns `None` only for a reference whose target has not been registered
/// (missing variable, or declared later in the run). The caller leaves the
/// variable without a value for that mode.
pub fn resolve(raw: &str, ty: TokenType, registry: &ScopedRegistry<'_>) -> Option<TypedValue> {
    if let Some(target) = reference_target(raw) {
        return registry.lookup(target).cloned().map(TypedValue::Alias);
    }

    Some(match ty {
        TokenType::Color => TypedValue::Color(color::decode(raw)),
        TokenType::Number => TypedValue::Number(leading_number(raw)),
        TokenType::Text => TypedValue::Text(raw.to_string()),
    })
}

/// Name referenced by `var(--name)` or `var(--name, fallback)`.
pub fn reference_target(raw: &str) -> Option<&str> {
    let rest = raw.trim().strip_prefix(REFERENCE_PREFIX)?;
    let end = rest
        .find(|c: char| c == ')' || c == ',' || c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

/// Parse the leading signed decimal of `raw`, or `0.0` when there is none.
pub fn leading_number(raw: &str) -> f64 {
    NUMERIC_PREFIX_REGEX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
