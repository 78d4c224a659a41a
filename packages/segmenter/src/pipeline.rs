//! Main segmentation pipeline that ties all stages together.

use rayon::prelude::*;

use crate::segmentation::{
    assemble_record, format_subsections, malformed_markers, normalize_lines, segment_laws,
    SegmentWarning, SegmentationReport,
};
use crate::source::SourceDocument;
use crate::types::{Law, LawRecord};

/// Records produced from one input, with diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentationOutput {
    pub records: Vec<LawRecord>,
    pub report: SegmentationReport,
}

/// Outcome of segmenting one source document in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub label: String,
    pub records: Vec<LawRecord>,
    pub report: SegmentationReport,
}

/// Segment raw extracted text into law records.
///
/// Deterministic: identical input always yields identical output.
///
/// # Examples
/// ```
/// use westeros_segmenter::pipeline::segment_text;
///
/// let output = segment_text("10.\n\nWatch\n\n10.1. Patrol the wall\n\neach night.");
/// assert_eq!(output.records.len(), 1);
/// assert_eq!(output.records[0].text, "10.1. Patrol the wall each night.");
/// assert_eq!(output.records[0].metadata.section, "Law 10 – Watch");
/// ```
#[must_use]
pub fn segment_text(raw_text: &str) -> SegmentationOutput {
    let paragraphs = normalize_lines(raw_text);
    segment_paragraphs(&paragraphs)
}

/// Segment an already normalized paragraph stream into law records.
#[must_use]
pub fn segment_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> SegmentationOutput {
    let segmentation = segment_laws(paragraphs);
    let mut report = segmentation.report;

    let records: Vec<LawRecord> = segmentation
        .laws
        .iter()
        .map(|law| build_record(law, &mut report))
        .collect();

    report.laws_emitted = records.len();
    if report.is_empty() {
        tracing::info!(
            paragraphs = report.paragraphs,
            laws_detected = report.laws_detected,
            "No laws emitted"
        );
    }

    SegmentationOutput { records, report }
}

/// Format and assemble one law, reporting suspicious content.
fn build_record(law: &Law, report: &mut SegmentationReport) -> LawRecord {
    for paragraph in malformed_markers(&law.paragraphs) {
        report.warn(SegmentWarning::MalformedMarker {
            law_id: law.id.clone(),
            paragraph: paragraph.to_string(),
        });
    }

    let lines = format_subsections(&law.paragraphs);
    let record = assemble_record(law, &lines);

    if record.text.is_empty() {
        report.warn(SegmentWarning::EmptyBody {
            law_id: law.id.clone(),
        });
    }

    record
}

/// Segment one source document.
#[tracing::instrument(skip_all, fields(label = %document.label))]
pub fn segment_document(document: &SourceDocument) -> DocumentOutcome {
    let SegmentationOutput { records, report } = segment_text(&document.text);
    tracing::debug!(
        laws = records.len(),
        dropped = report.dropped_laws(),
        "Document segmented"
    );
    DocumentOutcome {
        label: document.label.clone(),
        records,
        report,
    }
}

/// Segment independent documents in parallel.
///
/// Outcomes are returned in input order.
pub fn segment_documents(documents: &[SourceDocument]) -> Vec<DocumentOutcome> {
    documents.par_iter().map(segment_document).collect()
}
