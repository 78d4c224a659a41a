//! Error types for the segmenter.
//!
//! The segmentation core itself never fails: malformed structure degrades into
//! dropped laws and warnings (see [`crate::segmentation::SegmentationReport`]).
//! `SegmenterError` covers the surfaces around it: loading sources, writing
//! exports and the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the segmenter library.
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// A source text file could not be read.
    #[error("Failed to read source {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory is missing or not a directory.
    #[error("Invalid output directory {}: {reason}", .path.display())]
    OutputDirectory { path: PathBuf, reason: String },

    /// Unknown export format name.
    #[error("Invalid output format: '{0}'. Expected one of yaml, json, jsonl")]
    InvalidFormat(String),

    /// Collection name that cannot be used as an index name or file stem.
    #[error("Invalid collection name: '{0}'. Expected lowercase letters, digits and underscores (e.g., westeros_laws)")]
    InvalidCollectionName(String),

    /// A document produced no law records while records were required.
    #[error("No laws found in {label}")]
    NoLawsFound { label: String },

    /// A requested law id does not occur in a document.
    #[error("Law {law_id} not found in {label}")]
    LawNotFound { law_id: String, label: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, SegmenterError>;
