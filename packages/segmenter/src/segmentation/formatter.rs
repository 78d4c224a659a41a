//! Subsection formatting: rebuild numbered clause hierarchy within a law.
//!
//! Text extraction splits numbered clauses across paragraphs at arbitrary
//! points. A paragraph without a numbering prefix is merged into the line
//! rendered before it.

use crate::marker::{is_malformed_marker, parse_subsection};

/// Render a law's paragraphs as indented subsection lines.
///
/// Indentation is two spaces per dot separator in the number, so siblings
/// always line up regardless of their numeric value.
///
/// # Examples
/// ```
/// use westeros_segmenter::segmentation::format_subsections;
///
/// let lines = format_subsections(&["3.1. Pay gold", "to the crown", "3.1.1. In coin"]);
/// assert_eq!(lines, vec!["  3.1. Pay gold to the crown", "    3.1.1. In coin"]);
/// ```
pub fn format_subsections<S: AsRef<str>>(paragraphs: &[S]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for paragraph in paragraphs.iter().map(AsRef::as_ref) {
        if let Some(subsection) = parse_subsection(paragraph) {
            lines.push(subsection.render());
            continue;
        }

        match lines.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(paragraph);
            }
            None => lines.push(paragraph.to_string()),
        }
    }

    lines
}

/// Paragraphs that look numbered but were merged as continuation text.
pub fn malformed_markers<S: AsRef<str>>(paragraphs: &[S]) -> Vec<&str> {
    paragraphs
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| is_malformed_marker(p))
        .collect()
}
