//! Parser for annotated CSS custom properties.
//!
//! The source is read line by line. Only three kinds of lines matter:
//!
//! ```css
//! /* Collection name: Theme */
//! /* Mode: Light */
//! --surface: #ffffff;
//! ```
//!
//! Everything else (selectors, braces, other comments, malformed lines) is
//! skipped without error.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::data::{Collection, VariableDef};

// Matches `/* Collection name: Theme */`. Capture group 1 is the name, up to
// the first `*/` or the end of the line.
static COLLECTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/\*.*?Collection name:\s*(.*?)\s*(?:\*/|$)").unwrap()
});

// Matches `/* Mode: Light */`, same shape as the collection marker.
static MODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/\*.*?Mode:\s*(.*?)\s*(?:\*/|$)").unwrap());

// Matches `--name: value;`. Group 1 is the name, group 2 the value up to the
// first `;` (or the end of the line).
static DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--\s*([^:]*?)\s*:\s*([^;]*?)\s*(?:;|$)").unwrap());

/// Parse annotated text into collections in document order.
///
/// Collections with the same name are kept as separate entries; use
/// [`merge_repeated`] to fold them together.
pub fn parse(text: &str) -> Vec<Collection> {
    let mut collections: Vec<Collection> = Vec::new();
    // Index into `collections[last].modes` of the active mode.
    let mut current_mode: Option<usize> = None;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(name) = annotation(&COLLECTION_REGEX, trimmed) {
            collections.push(Collection::new(name));
            current_mode = None;
            continue;
        }

        let Some(collection) = collections.last_mut() else {
            continue;
        };

        if let Some(name) = annotation(&MODE_REGEX, trimmed) {
            current_mode = Some(collection.reset_mode(name));
            continue;
        }

        if let Some(index) = current_mode
            && let Some(def) = declaration(line)
        {
            collection.modes[index].variables.push(def);
        }
    }

    collections
}

/// Fold collections that share a name into the first occurrence.
///
/// Order of first occurrence is kept. See [`Collection::absorb`] for how
/// modes and variables are combined.
///
/// A mode repeated across blocks appends its variables instead of replacing
/// the earlier list: separate blocks are read as one collection split over
/// the file, which is also what syncing unmerged blocks produces in the
/// store. Only a `Mode:` marker repeated inside one block starts the list
/// over.
pub fn merge_repeated(collections: Vec<Collection>) -> Vec<Collection> {
    let mut merged: Vec<Collection> = Vec::with_capacity(collections.len());
    for collection in collections {
        match merged.iter_mut().find(|c| c.name == collection.name) {
            Some(existing) => existing.absorb(collection),
            None => merged.push(collection),
        }
    }
    merged
}

/// Extract the name from a `/* <marker> <name> */` comment line.
fn annotation<'a>(marker: &Regex, trimmed: &'a str) -> Option<&'a str> {
    marker
        .captures(trimmed)
        .map(|captures| captures.get(1).map_or("", |m| m.as_str()))
}

/// Extract `{name, raw_value}` from a `--name: value;` line.
fn declaration(line: &str) -> Option<VariableDef> {
    let captures = DECLARATION_REGEX.captures(line)?;
    let name = captures.get(1).map_or("", |m| m.as_str());
    if name.is_empty() {
        return None;
    }
    let value = captures.get(2).map_or("", |m| m.as_str());

    Some(VariableDef::new(name, value))
}
