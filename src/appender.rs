use crate::entry::Entry;
use regex::Regex;
use std::sync::OnceLock;

static TERMINATOR: OnceLock<Regex> = OnceLock::new();

/// Inserts formatted entry blocks just before the catalog array's closing
/// bracket. The terminator is the final `]`, an optional `;`, and nothing
/// but whitespace to end of text; everything before the insertion point is
/// preserved byte-for-byte.
///
/// Returns `None` when the terminator cannot be found, treating an
/// unexpected file shape as nothing-to-do rather than corrupting it.
pub fn append(text: &str, entries: &[Entry]) -> Option<String> {
    if entries.is_empty() {
        return Some(text.to_string());
    }

    let re =
        TERMINATOR.get_or_init(|| Regex::new(r"\]\s*;?\s*$").expect("terminator pattern is valid"));
    let mat = re.find(text)?;
    let insert_at = mat.start();

    let mut blocks = String::new();
    for entry in entries {
        blocks.push_str(&entry.to_block());
    }

    let mut result = String::with_capacity(text.len() + blocks.len());
    result.push_str(&text[..insert_at]);
    result.push_str(&blocks);
    result.push_str(&text[insert_at..]);
    Some(result)
}
