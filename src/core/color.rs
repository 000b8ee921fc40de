//! Color decoding into normalized `0.0..=1.0` channels.
//!
//! Supported forms are `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
//! `rgba(r, g, b, a)`. Any other input decodes to opaque black.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::data::Rgba;

static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d*\.?\d+)\s*\)$").unwrap()
});

static RGB_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").unwrap());

/// Decode a color literal. Never fails: unsupported or malformed input
/// (including `hsl`/`hsla`) yields [`Rgba::BLACK`].
pub fn decode(raw: &str) -> Rgba {
    let raw = raw.trim();
    let decoded = if let Some(hex) = raw.strip_prefix('#') {
        decode_hex(hex)
    } else if raw.starts_with("rgba") {
        decode_rgba(raw)
    } else if raw.starts_with("rgb") {
        decode_rgb(raw)
    } else {
        None
    };
    decoded.unwrap_or(Rgba::BLACK)
}

fn decode_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };

    match expanded.len() {
        8 => Some(Rgba::rgba(
            hex_channel(&expanded[0..2])?,
            hex_channel(&expanded[2..4])?,
            hex_channel(&expanded[4..6])?,
            hex_channel(&expanded[6..8])?,
        )),
        6 => Some(Rgba::rgb(
            hex_channel(&expanded[0..2])?,
            hex_channel(&expanded[2..4])?,
            hex_channel(&expanded[4..6])?,
        )),
        _ => None,
    }
}

fn hex_channel(pair: &str) -> Option<f64> {
    u8::from_str_radix(pair, 16)
        .ok()
        .map(|byte| f64::from(byte) / 255.0)
}

fn decode_rgba(raw: &str) -> Option<Rgba> {
    let caps = RGBA_REGEX.captures(raw)?;
    Some(Rgba::rgba(
        int_channel(&caps[1])?,
        int_channel(&caps[2])?,
        int_channel(&caps[3])?,
        alpha_channel(&caps[4])?,
    ))
}

fn decode_rgb(raw: &str) -> Option<Rgba> {
    let caps = RGB_REGEX.captures(raw)?;
    Some(Rgba::rgb(
        int_channel(&caps[1])?,
        int_channel(&caps[2])?,
        int_channel(&caps[3])?,
    ))
}

/// `0..=255`, anything larger is malformed.
fn int_channel(digits: &str) -> Option<f64> {
    digits.parse::<u8>().ok().map(|v| f64::from(v) / 255.0)
}

/// Alpha is already on the 0..1 scale and is kept as written.
fn alpha_channel(literal: &str) -> Option<f64> {
    literal
        .parse::<f64>()
        .ok()
        .filter(|alpha| (0.0..=1.0).contains(alpha))
}
