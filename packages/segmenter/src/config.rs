//! Configuration constants and validation functions for the segmenter.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SegmenterError};

/// Indentation added per nesting level below the first subsection level.
pub const INDENT_UNIT: &str = "  ";

/// Separator between law id and law name in the composed section label.
///
/// U+2013 EN DASH, as used by the downstream citation labels.
pub const SECTION_SEPARATOR: &str = " \u{2013} ";

/// Default index collection that receives the law records.
pub const DEFAULT_COLLECTION: &str = "westeros_laws";

/// Default wrap width for `inspect` output.
pub const DEFAULT_WRAP_WIDTH: usize = 100;

/// Environment variable overriding the collection name.
pub const ENV_COLLECTION: &str = "WESTEROS_COLLECTION";

/// Environment variable overriding the export format.
pub const ENV_OUTPUT_FORMAT: &str = "WESTEROS_OUTPUT_FORMAT";

/// Environment variable setting the export directory.
pub const ENV_OUTPUT_DIR: &str = "WESTEROS_OUTPUT_DIR";

/// Collection name pattern: lowercase identifier.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COLLECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid regex"));

/// Validate a collection name.
///
/// The name doubles as the export file stem, so it is restricted to
/// lowercase letters, digits and underscores.
///
/// # Examples
/// ```
/// use westeros_segmenter::config::validate_collection_name;
///
/// assert!(validate_collection_name("westeros_laws").is_ok());
/// assert!(validate_collection_name("../etc").is_err());
/// ```
pub fn validate_collection_name(name: &str) -> Result<()> {
    if COLLECTION_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(SegmenterError::InvalidCollectionName(name.to_string()))
    }
}

/// Serialization format for exported law records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML document with a `records` sequence.
    #[default]
    Yaml,

    /// Pretty-printed JSON object with a `records` array.
    Json,

    /// One compact JSON record per line.
    JsonLines,
}

impl OutputFormat {
    /// Get the string value used on the command line and in env vars.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::JsonLines => "jsonl",
        }
    }

    /// File extension for exports in this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::JsonLines => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = SegmenterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" => Ok(Self::JsonLines),
            _ => Err(SegmenterError::InvalidFormat(s.to_string())),
        }
    }
}

/// Where and how law records are handed off to the indexer.
///
/// Passed explicitly to [`crate::sink::FileSink`] at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub collection: String,
    pub format: OutputFormat,
    pub output_dir: Option<PathBuf>,
}

impl ExportConfig {
    pub fn new(collection: impl Into<String>) -> Result<Self> {
        let collection = collection.into();
        validate_collection_name(&collection)?;
        Ok(Self {
            collection,
            format: OutputFormat::default(),
            output_dir: None,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let collection = lookup(ENV_COLLECTION).unwrap_or_else(|| DEFAULT_COLLECTION.into());

        let format = match lookup(ENV_OUTPUT_FORMAT) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let output_dir = lookup(ENV_OUTPUT_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self::new(collection)?
            .with_format(format)
            .with_output_dir(output_dir))
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// File name of the export for this configuration.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.collection, self.format.extension())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            format: OutputFormat::default(),
            output_dir: None,
        }
    }
}
