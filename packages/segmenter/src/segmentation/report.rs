//! Diagnostics collected while segmenting a document.
//!
//! Segmentation never fails on malformed structure. Dropped laws, suspicious
//! numbering and empty results are recorded here so callers can detect
//! upstream extraction problems.

use std::fmt;

/// Why a detected law was not emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteReason {
    /// The id marker was not followed by a name paragraph.
    MissingName,

    /// The law had a name but no paragraphs after it.
    NoSubsections,
}

impl IncompleteReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingName => "missing name",
            Self::NoSubsections => "no subsections",
        }
    }
}

/// A non-fatal finding during segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentWarning {
    /// A law was detected but dropped.
    IncompleteLaw {
        law_id: String,
        reason: IncompleteReason,
    },

    /// A paragraph looks numbered but matches no marker pattern; it was
    /// merged as continuation text.
    MalformedMarker { law_id: String, paragraph: String },

    /// A law was emitted with an empty body.
    EmptyBody { law_id: String },
}

impl fmt::Display for SegmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteLaw { law_id, reason } => {
                write!(f, "Law {law_id} dropped: {}", reason.as_str())
            }
            Self::MalformedMarker { law_id, paragraph } => {
                write!(f, "Law {law_id}: unrecognized numbering in '{paragraph}'")
            }
            Self::EmptyBody { law_id } => write!(f, "Law {law_id} has an empty body"),
        }
    }
}

/// Counts and warnings for one segmentation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentationReport {
    /// Paragraphs produced by line normalization.
    pub paragraphs: usize,

    /// Law id markers seen.
    pub laws_detected: usize,

    /// Law records produced.
    pub laws_emitted: usize,

    /// Paragraphs seen before the first law id.
    pub discarded_paragraphs: usize,

    pub warnings: Vec<SegmentWarning>,
}

impl SegmentationReport {
    /// Record a warning and log it.
    pub fn warn(&mut self, warning: SegmentWarning) {
        match &warning {
            SegmentWarning::IncompleteLaw { law_id, reason } => {
                tracing::warn!(law_id = %law_id, reason = reason.as_str(), "Dropping incomplete law");
            }
            SegmentWarning::MalformedMarker { law_id, paragraph } => {
                tracing::warn!(
                    law_id = %law_id,
                    paragraph = %paragraph,
                    "Unrecognized numbering, treating as continuation text"
                );
            }
            SegmentWarning::EmptyBody { law_id } => {
                tracing::warn!(law_id = %law_id, "Law assembled with empty body");
            }
        }
        self.warnings.push(warning);
    }

    /// No laws were emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.laws_emitted == 0
    }

    /// Number of detected laws that were dropped.
    #[must_use]
    pub fn dropped_laws(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, SegmentWarning::IncompleteLaw { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = SegmentWarning::IncompleteLaw {
            law_id: "7".to_string(),
            reason: IncompleteReason::NoSubsections,
        };
        assert_eq!(warning.to_string(), "Law 7 dropped: no subsections");

        let warning = SegmentWarning::MalformedMarker {
            law_id: "3".to_string(),
            paragraph: "3) Pay".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Law 3: unrecognized numbering in '3) Pay'"
        );
    }

    #[test]
    fn test_dropped_laws_counts_only_incomplete() {
        let mut report = SegmentationReport::default();
        report.warn(SegmentWarning::IncompleteLaw {
            law_id: "1".to_string(),
            reason: IncompleteReason::MissingName,
        });
        report.warn(SegmentWarning::EmptyBody {
            law_id: "2".to_string(),
        });

        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.dropped_laws(), 1);
        assert!(report.is_empty());
    }
}
