//! Search-hit spans for display emphasis.

use std::ops::Range;

/// Byte ranges of `text` where the trimmed `query` matches,
/// case-insensitively. Matches do not overlap; an empty or whitespace-only
/// query yields no spans.
///
/// Ranges always fall on character boundaries of the original text, so the
/// caller can slice `text` directly to render the match in its original
/// casing.
#[must_use]
pub fn match_spans(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut start = 0;
    while start < text.len() {
        if let Some(len) = match_len_at(&text[start..], &needle) {
            spans.push(start..start + len);
            start += len;
        } else {
            start += text[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    spans
}

/// Byte length of a case-insensitive match of `needle` at the start of
/// `text`, if there is one. `needle` must already be lowercased.
fn match_len_at(text: &str, needle: &str) -> Option<usize> {
    let mut len = 0;
    let mut chars = text.chars();
    let mut need = needle.chars().peekable();
    while need.peek().is_some() {
        let c = chars.next()?;
        for folded in c.to_lowercase() {
            if need.next() != Some(folded) {
                return None;
            }
        }
        len += c.len_utf8();
    }
    Some(len)
}
