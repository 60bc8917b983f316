use regex::Regex;

/// Removes the first catalog entry whose `id` field equals `key`.
///
/// The match anchors on the entry's opening brace; from the end of the id
/// field a character scan counts brace nesting to find the matching close
/// brace, so values containing `{...}` of their own are skipped correctly.
/// The deleted span swallows one trailing comma (if present) and any
/// whitespace after it, leaving no blank line behind.
///
/// Returns `None` when no entry carries the key, which makes re-runs of the
/// same patch harmless.
pub fn prune(text: &str, key: &str) -> Option<String> {
    let pattern = format!(r#"\{{\s*id:\s*['"`]{}['"`],"#, regex::escape(key));
    // Static text around an escaped key; compilation cannot fail.
    let re = Regex::new(&pattern).expect("id field pattern is valid");
    let mat = re.find(text)?;

    let start = mat.start();
    let end = scan_record_end(text.as_bytes(), mat.end())?;
    let end = consume_separator(text.as_bytes(), end);

    let mut result = String::with_capacity(text.len() - (end - start));
    result.push_str(&text[..start]);
    result.push_str(&text[end..]);
    Some(result)
}

/// Scans forward from just inside the record, tracking nesting depth. The
/// record ends at the close brace seen while at depth zero, the one pairing
/// with the record's own opening brace.
fn scan_record_end(bytes: &[u8], mut pos: usize) -> Option<usize> {
    let mut depth = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                if depth == 0 {
                    return Some(pos + 1);
                }
                depth -= 1;
            }
            _ => {}
        }
        pos += 1;
    }
    // Ran off the end: unbalanced input, leave the text alone.
    None
}

fn consume_separator(bytes: &[u8], mut pos: usize) -> usize {
    if pos < bytes.len() && bytes[pos] == b',' {
        pos += 1;
    }
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\r') {
        pos += 1;
    }
    pos
}
