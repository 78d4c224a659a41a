//! Source documents: extracted text handed to the segmenter.
//!
//! Text extraction from the original document format happens elsewhere; this
//! module only accepts its output, either as one string, as per-page strings,
//! or as a text file on disk.

use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SegmenterError};

/// Extracted text of one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Human-readable label (usually the file name).
    pub label: String,

    /// Raw line-oriented text.
    pub text: String,
}

impl SourceDocument {
    /// Create a document from already extracted text.
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Create a document from per-page extractor output.
    ///
    /// Pages are joined with a single newline, so a law name or clause running
    /// over a page boundary is soft-wrapped like any other line.
    ///
    /// # Examples
    /// ```
    /// use westeros_segmenter::source::SourceDocument;
    ///
    /// let doc = SourceDocument::from_pages("laws.pdf", ["10.\nWatch", "10.1. Patrol"]);
    /// assert_eq!(doc.text, "10.\nWatch\n10.1. Patrol");
    /// ```
    #[must_use]
    pub fn from_pages<I, S>(label: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = pages
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(label, text)
    }

    /// Load extracted text from a UTF-8 file.
    ///
    /// Strips a leading byte order mark and applies Unicode NFC composition so
    /// decomposed accents from the extractor compare equal to composed ones.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| SegmenterError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!(label = %label, bytes = raw.len(), "Loaded source text");
        Ok(Self::new(label, normalize_source_text(&raw)))
    }
}

/// Strip a byte order mark and compose to NFC.
#[must_use]
pub fn normalize_source_text(raw: &str) -> String {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).nfc().collect()
}
