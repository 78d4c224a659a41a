//! Segmentation of extracted law text.
//!
//! Four stages, each a pure function of the previous stage's output:
//!
//! ```text
//! raw text ──normalize_lines──▶ paragraphs ──segment_laws──▶ laws
//!          ──format_subsections──▶ rendered lines ──assemble_record──▶ records
//! ```

mod assembler;
mod formatter;
mod normalizer;
mod report;
mod segmenter;

pub use assembler::assemble_record;
pub use formatter::{format_subsections, malformed_markers};
pub use normalizer::{normalize_lines, split_lines};
pub use report::{IncompleteReason, SegmentWarning, SegmentationReport};
pub use segmenter::{segment_laws, Segmentation};
