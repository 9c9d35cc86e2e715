use std::collections::BTreeSet;

use crate::classifier::{classify_line, ExtractionMode, LineClass};
use crate::tokenizer::split_lines;

/// Collect every distinct speaker name in a document, sorted lexicographically.
/// Uses the stricter name-inventory symbol set, so cues carrying parentheticals are skipped.
pub fn extract_names(text: &str) -> Vec<String> {
    split_lines(text)
        .filter_map(|line| match classify_line(line, ExtractionMode::NameInventory) {
            LineClass::CharacterCue(name) => Some(name),
            _ => None,
        })
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
