//! Command-line interface for the segmenter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ExportConfig, DEFAULT_WRAP_WIDTH};
use crate::error::{Result, SegmenterError};
use crate::export::{render_outline, render_records, validate_output_dir};
use crate::pipeline::{segment_documents, DocumentOutcome};
use crate::segmentation::{normalize_lines, segment_laws};
use crate::sink::{FileSink, RecordSink};
use crate::source::SourceDocument;
use crate::types::LawRecord;

/// Westeros law segmenter - Reconstruct laws and subsections from extracted text.
#[derive(Parser)]
#[command(name = "westeros-segmenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment extracted text files into law records for the indexer.
    Segment {
        /// Extracted text files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (default: print records to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: yaml, json or jsonl (default: WESTEROS_OUTPUT_FORMAT or yaml)
        #[arg(short, long)]
        format: Option<String>,

        /// Collection name (default: WESTEROS_COLLECTION or westeros_laws)
        #[arg(short, long)]
        collection: Option<String>,

        /// Fail when an input yields no laws
        #[arg(long)]
        require_laws: bool,
    },

    /// Print the reconstructed subsection tree of each law.
    Inspect {
        /// Extracted text file
        input: PathBuf,

        /// Only show the law with this id
        #[arg(short, long)]
        law: Option<String>,

        /// Wrap width
        #[arg(short, long, default_value_t = DEFAULT_WRAP_WIDTH)]
        width: usize,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment {
            inputs,
            output,
            format,
            collection,
            require_laws,
        } => {
            let config = build_export_config(output, format.as_deref(), collection)?;
            segment_command(&inputs, config, require_laws)
        }
        Commands::Inspect { input, law, width } => inspect_command(&input, law.as_deref(), width),
    }
}

/// Merge CLI overrides over the environment configuration.
fn build_export_config(
    output: Option<PathBuf>,
    format: Option<&str>,
    collection: Option<String>,
) -> Result<ExportConfig> {
    let mut config = ExportConfig::from_env()?;

    if let Some(collection) = collection {
        config = ExportConfig::new(collection)?
            .with_format(config.format)
            .with_output_dir(config.output_dir);
    }
    if let Some(format) = format {
        config = config.with_format(format.parse()?);
    }
    if output.is_some() {
        config = config.with_output_dir(output);
    }

    Ok(config)
}

/// Execute the segment command.
///
/// Status goes to stderr so records printed to stdout stay pipeable.
fn segment_command(inputs: &[PathBuf], config: ExportConfig, require_laws: bool) -> Result<()> {
    // Validate output directory before doing any work
    if let Some(output_dir) = &config.output_dir {
        validate_output_dir(output_dir)?;
    }

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    pb.set_message("Loading sources...");
    let documents = match inputs
        .iter()
        .map(|path| SourceDocument::load(path))
        .collect::<Result<Vec<_>>>()
    {
        Ok(documents) => documents,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message(format!("Segmenting {} document(s)...", documents.len()));
    let outcomes = segment_documents(&documents);
    pb.finish_and_clear();

    for outcome in &outcomes {
        print_summary(outcome);
    }

    if require_laws {
        if let Some(empty) = outcomes.iter().find(|o| o.records.is_empty()) {
            return Err(SegmenterError::NoLawsFound {
                label: empty.label.clone(),
            });
        }
    }

    let records: Vec<LawRecord> = outcomes.into_iter().flat_map(|o| o.records).collect();

    if config.output_dir.is_some() {
        let mut sink = FileSink::new(config)?;
        sink.load(&records)?;
        if let Some(path) = sink.written_path() {
            eprintln!();
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
    } else {
        print!("{}", render_records(&records, &config)?);
    }

    Ok(())
}

/// Print per-document counts and warnings.
fn print_summary(outcome: &DocumentOutcome) {
    let report = &outcome.report;

    eprintln!("{} {}", style("Segmented").bold(), style(&outcome.label).cyan());
    eprintln!("  Paragraphs: {}", report.paragraphs);
    eprintln!("  Laws: {}", style(report.laws_emitted).green());
    if report.dropped_laws() > 0 {
        eprintln!("  Dropped: {}", style(report.dropped_laws()).yellow().bold());
    }
    // Individual warnings are already logged as they are raised
    if !report.warnings.is_empty() {
        eprintln!("  Warnings: {}", style(report.warnings.len()).yellow().bold());
    }
}

/// Execute the inspect command.
fn inspect_command(input: &Path, law_id: Option<&str>, width: usize) -> Result<()> {
    let document = SourceDocument::load(input)?;
    let paragraphs = normalize_lines(&document.text);
    let laws = segment_laws(&paragraphs).laws;

    let selected: Vec<_> = laws
        .iter()
        .filter(|law| law_id.is_none_or(|id| law.id == id))
        .collect();

    if selected.is_empty() {
        return Err(match law_id {
            Some(id) => SegmenterError::LawNotFound {
                law_id: id.to_string(),
                label: document.label,
            },
            None => SegmenterError::NoLawsFound {
                label: document.label,
            },
        });
    }

    let outlines: Vec<String> = selected
        .iter()
        .map(|law| render_outline(law, width))
        .collect();
    println!("{}", outlines.join("\n\n"));

    Ok(())
}
