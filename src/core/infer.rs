//! Type inference for raw token values.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::data::TokenType;

/// Prefix of a `var(--name)` reference.
pub const REFERENCE_PREFIX: &str = "var(--";

const COLOR_PREFIXES: &[&str] = &["#", "rgb", "rgba", "hsl", "hsla"];

// Signed decimal followed by one of the supported length/percentage units.
static NUMBER_WITH_UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:px|rem|em|%|vw|vh|vmin|vmax)$").unwrap()
});

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)$").unwrap());

/// Classify a raw value. First matching rule wins:
///
/// 1. `var(--…)` references are treated as colors. The referenced variable's
///    real type is not looked up.
/// 2. `#`, `rgb`, `rgba`, `hsl`, `hsla` prefixes are colors. `hsl` values have
///    no decoder and end up as black.
/// 3. Numbers with a unit suffix (`12px`, `1.5rem`, `50%`).
/// 4. Bare numbers (`12`, `-0.5`).
/// 5. Anything else is text.
pub fn infer_type(raw: &str) -> TokenType {
    if raw.starts_with(REFERENCE_PREFIX) {
        return TokenType::Color;
    }
    if COLOR_PREFIXES.iter().any(|prefix| raw.starts_with(prefix)) {
        return TokenType::Color;
    }
    if NUMBER_WITH_UNIT_REGEX.is_match(raw) || NUMBER_REGEX.is_match(raw) {
        return TokenType::Number;
    }
    TokenType::Text
}
