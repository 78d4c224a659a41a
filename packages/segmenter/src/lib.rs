//! Westeros Segmenter - Reconstruct laws from extracted legal text.
//!
//! Text extracted from a legal document (typically PDF pages) loses its
//! structure: laws, their names and their numbered subsections end up as a
//! flat stream of wrapped lines. This crate rebuilds that structure and emits
//! one record per law for a downstream indexer.
//!
//! # Example
//!
//! ```
//! use westeros_segmenter::segment_text;
//!
//! let output = segment_text("10.\n\nWatch\n\n10.1. Patrol the wall\n\neach night.");
//!
//! assert_eq!(output.records.len(), 1);
//! assert_eq!(output.records[0].metadata.section, "Law 10 – Watch");
//! assert_eq!(output.records[0].text, "10.1. Patrol the wall each night.");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, export configuration and validation
//! - [`types`]: Core data types (Law, SubsectionLine, LawRecord)
//! - [`error`]: Error types and Result alias
//! - [`marker`]: Numbering marker recognition
//! - [`segmentation`]: Normalizer, segmenter, formatter and assembler stages
//! - [`pipeline`]: Stages wired together, single and batch
//! - [`source`]: Loading extracted text
//! - [`export`]: YAML/JSON export and text outlines
//! - [`sink`]: Record handoff to the indexer
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod marker;
pub mod pipeline;
pub mod segmentation;
pub mod sink;
pub mod source;
pub mod types;

// Re-export main functions
pub use pipeline::{segment_document, segment_documents, segment_paragraphs, segment_text};

// Re-export commonly used items
pub use config::{ExportConfig, OutputFormat};
pub use error::{Result, SegmenterError};
pub use segmentation::{SegmentWarning, SegmentationReport};
pub use sink::{FileSink, MemorySink, RecordSink};
pub use source::SourceDocument;
pub use types::{Law, LawRecord, LawRecordMetadata};
