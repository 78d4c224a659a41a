//! Core data types for the segmenter.
//!
//! These types represent laws reconstructed from flat extracted text and the
//! records handed to the downstream indexer.

use serde::{Deserialize, Serialize};

use crate::config::{INDENT_UNIT, SECTION_SEPARATOR};

/// A law detected in the paragraph stream.
///
/// Only materialized with a non-empty id, a non-empty name and at least one
/// paragraph; incomplete laws are dropped by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Law {
    /// Numeric law identifier without trailing dot (e.g., "10").
    pub id: String,

    /// Law name, taken verbatim from the paragraph after the id marker.
    pub name: String,

    /// Paragraphs belonging to the law, in input order.
    pub paragraphs: Vec<String>,
}

impl Law {
    /// Create a new law.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            paragraphs,
        }
    }

    /// Label used to cite this law (e.g., "Law 10 – Watch").
    #[must_use]
    pub fn section_label(&self) -> String {
        section_label(&self.id, &self.name)
    }
}

/// Compose the section label for a law id and name.
#[must_use]
pub fn section_label(id: &str, name: &str) -> String {
    format!("Law {id}{SECTION_SEPARATOR}{name}")
}

/// A numbered subsection parsed from a paragraph (e.g., "3.1.2. Pay grain").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectionLine {
    /// Dot path without trailing dot (e.g., "3.1.2").
    pub number: String,

    /// Number of path components.
    pub depth: usize,

    /// Text after the number, trimmed. May be empty for bare markers.
    pub rest: String,
}

impl SubsectionLine {
    /// Create a subsection line, deriving depth from the dot path.
    #[must_use]
    pub fn new(number: impl Into<String>, rest: impl Into<String>) -> Self {
        let number = number.into();
        let depth = number.matches('.').count() + 1;
        Self {
            number,
            depth,
            rest: rest.into(),
        }
    }

    /// Indentation for this line: one unit per level below the first.
    #[must_use]
    pub fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.depth.saturating_sub(1))
    }

    /// Render the line with indentation.
    #[must_use]
    pub fn render(&self) -> String {
        if self.rest.is_empty() {
            format!("{}{}.", self.indent(), self.number)
        } else {
            format!("{}{}. {}", self.indent(), self.number, self.rest)
        }
    }
}

/// Identifying metadata of a law record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawRecordMetadata {
    #[serde(rename = "LawId")]
    pub law_id: String,

    #[serde(rename = "LawName")]
    pub law_name: String,

    #[serde(rename = "Section")]
    pub section: String,
}

/// The unit handed to the external indexer: one law with its assembled body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawRecord {
    pub metadata: LawRecordMetadata,
    pub text: String,
}

impl LawRecord {
    /// Create a record for a law with an assembled body text.
    #[must_use]
    pub fn new(law: &Law, text: impl Into<String>) -> Self {
        Self {
            metadata: LawRecordMetadata {
                law_id: law.id.clone(),
                law_name: law.name.clone(),
                section: law.section_label(),
            },
            text: text.into(),
        }
    }
}
