//! Numbering markers found in extracted law text.
//!
//! Three shapes carry structure:
//!
//! ```text
//! 10.          law id (top-level number, nothing else)
//! 10.1.        standalone subsection marker (line on its own)
//! 10.1. text   subsection with inline text
//! ```
//!
//! A bare top-level number always starts a law; a subsection needs at least
//! one embedded dot.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::SubsectionLine;

/// Standalone structural marker line: "10.", "10.1.", "10.1.1.".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static STANDALONE_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*\.$").expect("valid regex"));

/// Law id paragraph: a single number with trailing dot.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LAW_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*$").expect("valid regex"));

/// Subsection paragraph: dotted number path with trailing dot, then optional text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBSECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)+\.)\s*(.*)$").expect("valid regex"));

/// Leading token that looks like numbering: "10.1", "5.", "3)", "2.4)".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERIC_LOOKING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.)]\d*)+(?:\s|$)").expect("valid regex"));

/// Check if a trimmed line is a standalone structural marker.
///
/// # Examples
/// ```
/// use westeros_segmenter::marker::is_standalone_marker;
///
/// assert!(is_standalone_marker("10."));
/// assert!(is_standalone_marker("10.1.1."));
/// assert!(!is_standalone_marker("10.1"));
/// assert!(!is_standalone_marker("10.1. Patrol"));
/// ```
#[must_use]
pub fn is_standalone_marker(line: &str) -> bool {
    STANDALONE_MARKER_PATTERN.is_match(line)
}

/// Extract the law id from a paragraph that is purely a top-level number.
///
/// # Examples
/// ```
/// use westeros_segmenter::marker::parse_law_id;
///
/// assert_eq!(parse_law_id("10."), Some("10"));
/// assert_eq!(parse_law_id("10.1."), None);
/// assert_eq!(parse_law_id("10. Watch"), None);
/// ```
#[must_use]
pub fn parse_law_id(paragraph: &str) -> Option<&str> {
    LAW_ID_PATTERN
        .captures(paragraph)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a subsection numbering prefix.
///
/// The trailing dot is stripped from the number and the remaining text is
/// trimmed.
///
/// # Examples
/// ```
/// use westeros_segmenter::marker::parse_subsection;
///
/// let line = parse_subsection("3.1.2. Pay grain").unwrap();
/// assert_eq!(line.number, "3.1.2");
/// assert_eq!(line.depth, 3);
/// assert_eq!(line.rest, "Pay grain");
///
/// assert!(parse_subsection("3. Taxes").is_none());
/// ```
#[must_use]
pub fn parse_subsection(paragraph: &str) -> Option<SubsectionLine> {
    let caps = SUBSECTION_PATTERN.captures(paragraph)?;
    let number = caps.get(1)?.as_str();
    let number = number.strip_suffix('.').unwrap_or(number);
    let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some(SubsectionLine::new(number, rest))
}

/// Check if a paragraph looks like numbering but is neither a law id nor a
/// subsection (e.g., "10.1 Patrol" without the trailing dot, "5. Pay gold",
/// "3) Pay").
///
/// Such paragraphs are continuation text; this only feeds diagnostics.
#[must_use]
pub fn is_malformed_marker(paragraph: &str) -> bool {
    NUMERIC_LOOKING_PATTERN.is_match(paragraph)
        && parse_law_id(paragraph).is_none()
        && !SUBSECTION_PATTERN.is_match(paragraph)
}
