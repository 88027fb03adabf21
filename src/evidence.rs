//! Evidence extraction
//!
//! Evidence is a verbatim, human-readable excerpt of the input anchored at
//! the match start. Window sizes are measured in characters, and every cut
//! lands on a UTF-8 boundary.

/// Characters kept on each side of the match start
pub const EVIDENCE_RADIUS: usize = 100;

/// Marker added where the excerpt was cut
pub const ELLIPSIS: &str = "...";

/// Byte offset reached by walking `n` characters back from `from`
pub(crate) fn chars_back(text: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(i, _)| i)
}

/// Byte offset reached by walking `n` characters forward from `from`
pub(crate) fn chars_forward(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| from + i)
}

/// Extract the evidence excerpt around `start` (a byte offset into `text`).
///
/// The window spans [`EVIDENCE_RADIUS`] characters before and after `start`,
/// is trimmed, and gets an [`ELLIPSIS`] on each side that does not reach the
/// corresponding end of the text.
pub fn extract_evidence(text: &str, start: usize) -> String {
    let from = chars_back(text, start, EVIDENCE_RADIUS);
    let to = chars_forward(text, start, EVIDENCE_RADIUS);

    let mut snippet = String::with_capacity(to - from + 2 * ELLIPSIS.len());
    if from > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(text[from..to].trim());
    if to < text.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}
