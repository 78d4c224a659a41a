//! Law segmentation: paragraph stream into laws.
//!
//! A single fold over the paragraphs drives an explicit state:
//!
//! ```text
//! SeekingId ──"10."──▶ ExpectingName ──"Watch"──▶ Collecting ──"11."──▶ ExpectingName
//!                          ▲                          │
//!                          └──────────"12."───────────┘
//! ```
//!
//! A law id marker flushes whatever law is in progress, in any state.

use super::report::{IncompleteReason, SegmentWarning, SegmentationReport};
use crate::marker::parse_law_id;
use crate::types::Law;

/// Laws found in a paragraph stream, with diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub laws: Vec<Law>,
    pub report: SegmentationReport,
}

/// Segmenter state between paragraphs.
#[derive(Debug)]
enum SegmenterState {
    /// No law id seen yet; paragraphs are preamble noise.
    SeekingId,

    /// A law id was seen; the next non-empty paragraph is its name.
    ExpectingName { id: String },

    /// Accumulating paragraphs for a named law.
    Collecting { law: Law },
}

impl SegmenterState {
    fn advance(self, paragraph: &str, out: &mut Segmentation) -> Self {
        if let Some(id) = parse_law_id(paragraph) {
            self.flush(out);
            out.report.laws_detected += 1;
            return Self::ExpectingName { id: id.to_string() };
        }

        match self {
            Self::SeekingId => {
                out.report.discarded_paragraphs += 1;
                Self::SeekingId
            }
            Self::ExpectingName { id } => {
                let name = paragraph.trim();
                if name.is_empty() {
                    Self::ExpectingName { id }
                } else {
                    Self::Collecting {
                        law: Law::new(id, name, Vec::new()),
                    }
                }
            }
            Self::Collecting { mut law } => {
                law.paragraphs.push(paragraph.to_string());
                Self::Collecting { law }
            }
        }
    }

    /// Emit the law in progress if it is complete.
    fn flush(self, out: &mut Segmentation) {
        match self {
            Self::SeekingId => {}
            Self::ExpectingName { id } => out.report.warn(SegmentWarning::IncompleteLaw {
                law_id: id,
                reason: IncompleteReason::MissingName,
            }),
            Self::Collecting { law } if law.paragraphs.is_empty() => {
                out.report.warn(SegmentWarning::IncompleteLaw {
                    law_id: law.id,
                    reason: IncompleteReason::NoSubsections,
                });
            }
            Self::Collecting { law } => {
                tracing::debug!(
                    law_id = %law.id,
                    paragraphs = law.paragraphs.len(),
                    "Law segmented"
                );
                out.laws.push(law);
            }
        }
    }
}

/// Split a paragraph stream into laws.
///
/// Paragraphs before the first law id are discarded. Laws without a name or
/// without paragraphs are dropped and reported.
///
/// # Examples
/// ```
/// use westeros_segmenter::segmentation::segment_laws;
///
/// let paragraphs = ["10.", "Watch", "10.1. Patrol the wall", "each night."];
/// let segmentation = segment_laws(&paragraphs);
///
/// assert_eq!(segmentation.laws.len(), 1);
/// assert_eq!(segmentation.laws[0].id, "10");
/// assert_eq!(segmentation.laws[0].name, "Watch");
/// ```
pub fn segment_laws<S: AsRef<str>>(paragraphs: &[S]) -> Segmentation {
    let (state, mut out) = paragraphs.iter().fold(
        (SegmenterState::SeekingId, Segmentation::default()),
        |(state, mut out), paragraph| {
            let state = state.advance(paragraph.as_ref(), &mut out);
            (state, out)
        },
    );
    state.flush(&mut out);
    out.report.paragraphs = paragraphs.len();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_law() {
        let result = segment_laws(&["10.", "Watch", "10.1. Patrol the wall", "each night."]);

        assert_eq!(
            result.laws,
            vec![Law::new(
                "10",
                "Watch",
                vec!["10.1. Patrol the wall".to_string(), "each night.".to_string()]
            )]
        );
        assert_eq!(result.report.laws_detected, 1);
        assert!(result.report.warnings.is_empty());
    }

    #[test]
    fn test_multiple_laws_in_order() {
        let result = segment_laws(&[
            "1.", "Crown", "1.1. The king rules", "2.", "Watch", "2.1. Guard the wall",
        ]);

        let ids: Vec<&str> = result.laws.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(result.laws[1].paragraphs, vec!["2.1. Guard the wall"]);
    }

    #[test]
    fn test_preamble_is_discarded() {
        let result = segment_laws(&["Laws of the Seven Kingdoms", "Page 1", "3.", "Taxes", "3.1. Pay"]);

        assert_eq!(result.laws.len(), 1);
        assert_eq!(result.report.discarded_paragraphs, 2);
    }

    #[test]
    fn test_name_is_trimmed() {
        let result = segment_laws(&["4.", "  Inheritance  ", "4.1. Sons first"]);
        assert_eq!(result.laws[0].name, "Inheritance");
    }

    #[test]
    fn test_empty_paragraph_while_expecting_name_is_skipped() {
        let result = segment_laws(&["5.", "", "   ", "Marriage", "5.1. Vows"]);

        assert_eq!(result.laws.len(), 1);
        assert_eq!(result.laws[0].name, "Marriage");
        assert_eq!(result.laws[0].paragraphs, vec!["5.1. Vows"]);
    }

    #[test]
    fn test_law_without_paragraphs_is_dropped() {
        // The subsection becomes the name, leaving nothing to collect
        let result = segment_laws(&["7.", "", "7.1. Orphan clause"]);

        assert!(result.laws.is_empty());
        assert_eq!(
            result.report.warnings,
            vec![SegmentWarning::IncompleteLaw {
                law_id: "7".to_string(),
                reason: IncompleteReason::NoSubsections,
            }]
        );
    }

    #[test]
    fn test_law_without_name_is_dropped() {
        let result = segment_laws(&["8.", "9.", "Trade", "9.1. Fair weights"]);

        assert_eq!(result.laws.len(), 1);
        assert_eq!(result.laws[0].id, "9");
        assert_eq!(result.report.laws_detected, 2);
        assert_eq!(
            result.report.warnings,
            vec![SegmentWarning::IncompleteLaw {
                law_id: "8".to_string(),
                reason: IncompleteReason::MissingName,
            }]
        );
    }

    #[test]
    fn test_trailing_id_without_name_is_dropped() {
        let result = segment_laws(&["1.", "Crown", "1.1. Rule", "2."]);

        assert_eq!(result.laws.len(), 1);
        assert_eq!(result.report.dropped_laws(), 1);
    }

    #[test]
    fn test_subsection_marker_never_starts_law() {
        let result = segment_laws(&["3.", "Taxes", "3.1.", "Pay gold", "3.2.", "Pay grain"]);

        assert_eq!(result.laws.len(), 1);
        assert_eq!(result.laws[0].paragraphs.len(), 4);
    }

    #[test]
    fn test_no_markers_yields_nothing() {
        let result = segment_laws(&["Just prose", "and more prose"]);

        assert!(result.laws.is_empty());
        assert!(result.report.is_empty());
        assert_eq!(result.report.laws_detected, 0);
        assert_eq!(result.report.paragraphs, 2);
    }

    #[test]
    fn test_empty_input() {
        let result = segment_laws::<&str>(&[]);
        assert_eq!(result, Segmentation::default());
    }

    #[test]
    fn test_completeness_invariant() {
        let result = segment_laws(&[
            "junk", "1.", "2.", "Two", "3.", "Three", "3.1. a", "4.", "", "Four", "4.1. b", "5.",
        ]);

        assert_eq!(result.laws.len(), 2);
        for law in &result.laws {
            assert!(!law.id.is_empty());
            assert!(!law.name.is_empty());
            assert!(!law.paragraphs.is_empty());
        }
        assert_eq!(result.report.dropped_laws(), 3);
    }
}
