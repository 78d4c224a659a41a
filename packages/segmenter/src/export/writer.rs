//! Record writers for the indexer handoff files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ExportConfig, OutputFormat};
use crate::error::{Result, SegmenterError};
use crate::types::LawRecord;

/// Export file layout for YAML and JSON.
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    collection: &'a str,
    records: &'a [LawRecord],
}

/// Indent YAML sequences to comply with `indent-sequences: true`.
///
/// serde_yaml_ng places sequence items (`- `) at the same indent as their
/// parent key. This adds 2 spaces per open sequence so items sit under their
/// parent, e.g.:
///
/// ```yaml
/// # Before:          # After:
/// records:           records:
/// - metadata:          - metadata:
///     LawId: '10'          LawId: '10'
/// ```
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    // Stack of indent levels where sequences start
    let mut seq_indents: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            result.push(line.to_string());
            continue;
        }

        let indent = line.len() - trimmed.len();

        // Pop sequences we've exited: shallower indent, or same indent but
        // not a sequence item
        while let Some(&seq_indent) = seq_indents.last() {
            if indent < seq_indent || (indent == seq_indent && !trimmed.starts_with("- ")) {
                seq_indents.pop();
            } else {
                break;
            }
        }

        if trimmed.starts_with("- ") {
            let is_continuation = seq_indents.last().is_some_and(|&si| si == indent);
            if !is_continuation {
                seq_indents.push(indent);
            }
        }

        let extra = seq_indents.len() * 2;
        if extra > 0 {
            result.push(format!("{}{}", " ".repeat(indent + extra), trimmed));
        } else {
            result.push(line.to_string());
        }
    }

    result.join("\n")
}

/// Generate a YAML export of law records.
pub fn generate_yaml(records: &[LawRecord], collection: &str) -> Result<String> {
    let document = ExportDocument {
        collection,
        records,
    };
    let yaml_string = serde_yaml_ng::to_string(&document)?;
    let yaml_string = indent_yaml_sequences(&yaml_string);

    // Add document start marker and clean up trailing whitespace
    let lines: Vec<&str> = yaml_string.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Generate a pretty-printed JSON export of law records.
pub fn generate_json(records: &[LawRecord], collection: &str) -> Result<String> {
    let document = ExportDocument {
        collection,
        records,
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&document)?))
}

/// Generate JSON lines: one compact record per line.
pub fn generate_json_lines(records: &[LawRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Render records in the configured format.
pub fn render_records(records: &[LawRecord], config: &ExportConfig) -> Result<String> {
    match config.format {
        OutputFormat::Yaml => generate_yaml(records, &config.collection),
        OutputFormat::Json => generate_json(records, &config.collection),
        OutputFormat::JsonLines => generate_json_lines(records),
    }
}

/// Check that an output directory exists and is a directory.
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SegmenterError::OutputDirectory {
            path: path.to_path_buf(),
            reason: "does not exist".to_string(),
        });
    }
    if !path.is_dir() {
        return Err(SegmenterError::OutputDirectory {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}

/// Save records to `{output_dir}/{collection}.{ext}`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt an existing export on crash.
///
/// # Returns
/// Path to the saved file
pub fn save_records(
    records: &[LawRecord],
    config: &ExportConfig,
    output_dir: &Path,
) -> Result<PathBuf> {
    validate_output_dir(output_dir)?;

    let file_name = config.file_name();
    let output_file = output_dir.join(&file_name);
    let temp_file = output_dir.join(format!(".{file_name}.tmp"));

    let content = render_records(records, config)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    tracing::debug!(
        path = %output_file.display(),
        records = records.len(),
        format = %config.format,
        "Saved law records"
    );
    Ok(output_file)
}
