//! Handoff of law records to the indexing collaborator.
//!
//! The indexer (embedding, similarity search, answer generation) lives
//! outside this crate. A [`RecordSink`] is the seam it plugs into; sinks take
//! their configuration at construction time.

use std::path::PathBuf;

use crate::config::ExportConfig;
use crate::error::{Result, SegmenterError};
use crate::export::{save_records, validate_output_dir};
use crate::types::LawRecord;

/// Receiver of completed law records.
pub trait RecordSink {
    /// Accept a batch of records in order.
    ///
    /// # Returns
    /// Number of records accepted
    fn load(&mut self, records: &[LawRecord]) -> Result<usize>;
}

/// Sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<LawRecord>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[LawRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<LawRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn load(&mut self, records: &[LawRecord]) -> Result<usize> {
        self.records.extend_from_slice(records);
        Ok(records.len())
    }
}

/// Sink that writes an export file an indexer can ingest.
///
/// Every `load` call rewrites the export with all records received so far.
#[derive(Debug)]
pub struct FileSink {
    config: ExportConfig,
    output_dir: PathBuf,
    records: Vec<LawRecord>,
    written: Option<PathBuf>,
}

impl FileSink {
    /// Create a file sink; the config must name an existing output directory.
    pub fn new(config: ExportConfig) -> Result<Self> {
        let output_dir = config
            .output_dir
            .clone()
            .ok_or_else(|| SegmenterError::OutputDirectory {
                path: PathBuf::new(),
                reason: "no output directory configured".to_string(),
            })?;
        validate_output_dir(&output_dir)?;

        Ok(Self {
            config,
            output_dir,
            records: Vec::new(),
            written: None,
        })
    }

    /// Path of the last written export, if any.
    #[must_use]
    pub fn written_path(&self) -> Option<&PathBuf> {
        self.written.as_ref()
    }
}

impl RecordSink for FileSink {
    fn load(&mut self, records: &[LawRecord]) -> Result<usize> {
        self.records.extend_from_slice(records);
        let path = save_records(&self.records, &self.config, &self.output_dir)?;
        self.written = Some(path);
        Ok(records.len())
    }
}
