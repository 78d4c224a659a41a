//! Line normalization: raw extracted lines into logical paragraphs.

use crate::marker::is_standalone_marker;

/// Line boundaries emitted by text extractors, besides `\n` and `\r`.
///
/// Vertical tab, form feed (page break), file/group/record separators, NEL,
/// line separator and paragraph separator.
const EXTRA_LINE_BREAKS: [char; 8] = [
    '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on every universal line boundary.
///
/// `\r\n` counts as a single boundary. A trailing boundary does not produce
/// an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let is_break = c == '\n' || c == '\r' || EXTRA_LINE_BREAKS.contains(&c);
        if !is_break {
            continue;
        }

        lines.push(&text[start..idx]);
        let mut end = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                end = next_idx + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Accumulates soft-wrapped line fragments until a paragraph boundary.
#[derive(Default)]
struct ParagraphBuffer {
    fragments: Vec<String>,
}

impl ParagraphBuffer {
    fn push(&mut self, line: &str) {
        self.fragments.push(line.to_string());
    }

    fn flush_into(&mut self, paragraphs: &mut Vec<String>) {
        if self.fragments.is_empty() {
            return;
        }
        let paragraph = self.fragments.join(" ").trim().to_string();
        self.fragments.clear();
        if !paragraph.is_empty() {
            paragraphs.push(paragraph);
        }
    }
}

/// Collapse raw text into paragraphs.
///
/// - Blank lines end the current paragraph.
/// - Standalone markers ("10.", "10.1.") end the current paragraph and are
///   emitted as paragraphs of their own.
/// - Any other line is joined to the current paragraph with a single space.
///
/// # Examples
/// ```
/// use westeros_segmenter::segmentation::normalize_lines;
///
/// let paragraphs = normalize_lines("10.\nWatch\n\n10.1. Patrol the\nwall");
/// assert_eq!(paragraphs, vec!["10.", "Watch", "10.1. Patrol the wall"]);
/// ```
pub fn normalize_lines(raw_text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut buffer = ParagraphBuffer::default();

    for line in split_lines(raw_text).into_iter().map(str::trim) {
        if line.is_empty() {
            buffer.flush_into(&mut paragraphs);
            continue;
        }

        if is_standalone_marker(line) {
            buffer.flush_into(&mut paragraphs);
            paragraphs.push(line.to_string());
        } else {
            buffer.push(line);
        }
    }

    buffer.flush_into(&mut paragraphs);
    tracing::debug!(paragraphs = paragraphs.len(), "Normalized lines into paragraphs");
    paragraphs
}
