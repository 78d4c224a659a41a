//! End-to-end tests for the segmentation pipeline and CLI.
//!
//! Uses an extracted-text fixture with a preamble, a page break, a law
//! without a name and a malformed subsection marker.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use westeros_segmenter::config::OutputFormat;
use westeros_segmenter::export::generate_yaml;
use westeros_segmenter::segmentation::{IncompleteReason, SegmentWarning};
use westeros_segmenter::{
    segment_documents, segment_text, ExportConfig, FileSink, LawRecord, RecordSink,
    SourceDocument,
};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("westeros")
        .join(name)
}

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn run_pipeline() -> Vec<LawRecord> {
    segment_text(&load_fixture("laws.txt")).records
}

#[test]
fn test_pipeline_law_count() {
    let records = run_pipeline();

    let ids: Vec<&str> = records.iter().map(|r| r.metadata.law_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
}

#[test]
fn test_pipeline_sections() {
    let records = run_pipeline();

    assert_eq!(records[0].metadata.section, "Law 1 – The Crown");
    assert_eq!(records[1].metadata.section, "Law 2 – The Night's Watch");
    assert_eq!(records[2].metadata.section, "Law 4 – Taxes");
}

#[test]
fn test_pipeline_wrapped_lines_rejoined() {
    let records = run_pipeline();

    assert_eq!(
        records[0].text,
        "1.1. The king rules the Seven Kingdoms from the Iron Throne.   \
         1.2. The Hand speaks with the voice of the king."
    );
}

#[test]
fn test_pipeline_nested_subsections_across_page_break() {
    let records = run_pipeline();

    assert_eq!(
        records[1].text,
        "2.1. The Watch guards the Wall.     2.1.1. Deserters forfeit their lives."
    );
}

#[test]
fn test_pipeline_report() {
    let output = segment_text(&load_fixture("laws.txt"));
    let report = &output.report;

    assert_eq!(report.discarded_paragraphs, 1);
    assert_eq!(report.laws_detected, 4);
    assert_eq!(report.laws_emitted, 3);
    assert_eq!(report.dropped_laws(), 1);
    assert!(report.warnings.contains(&SegmentWarning::IncompleteLaw {
        law_id: "3".to_string(),
        reason: IncompleteReason::MissingName,
    }));
    assert!(report.warnings.contains(&SegmentWarning::MalformedMarker {
        law_id: "4".to_string(),
        paragraph: "4.2) Grain may replace gold in lean years.".to_string(),
    }));
}

#[test]
fn test_malformed_marker_kept_as_text() {
    let records = run_pipeline();

    assert!(records[2]
        .text
        .ends_with("4.1.1. Tribute is paid in gold. 4.2) Grain may replace gold in lean years."));
}

#[test]
fn test_pipeline_is_deterministic() {
    assert_eq!(run_pipeline(), run_pipeline());
}

#[test]
fn test_batch_preserves_input_order() {
    let documents = vec![
        SourceDocument::load(&fixture_path("preface.txt")).unwrap(),
        SourceDocument::load(&fixture_path("laws.txt")).unwrap(),
    ];

    let outcomes = segment_documents(&documents);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].label, "preface.txt");
    assert!(outcomes[0].records.is_empty());
    assert!(outcomes[0].report.is_empty());
    assert_eq!(outcomes[1].label, "laws.txt");
    assert_eq!(outcomes[1].records, run_pipeline());
}

#[test]
fn test_yaml_generation() {
    let records = run_pipeline();
    let yaml = generate_yaml(&records, "westeros_laws").expect("Failed to generate YAML");

    assert!(yaml.starts_with("---\n"), "YAML should start with document marker");
    assert!(yaml.contains("collection: westeros_laws"));
    assert!(yaml.contains("LawName: The Crown"));
    assert!(
        !yaml.lines().any(|line| line != line.trim_end()),
        "YAML should have no trailing whitespace"
    );
}

#[test]
fn test_yaml_validates_structure() {
    let records = run_pipeline();
    let yaml = generate_yaml(&records, "westeros_laws").expect("Failed to generate YAML");

    let parsed: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).expect("Invalid YAML");
    let parsed_records: Vec<LawRecord> =
        serde_yaml_ng::from_value(parsed["records"].clone()).expect("Invalid records");
    assert_eq!(parsed_records, records);
}

#[test]
fn test_file_sink_export() {
    let temp_dir = tempdir().unwrap();
    let config = ExportConfig::new("kings_laws")
        .unwrap()
        .with_format(OutputFormat::Json)
        .with_output_dir(Some(temp_dir.path().to_path_buf()));
    let mut sink = FileSink::new(config).unwrap();

    let records = run_pipeline();
    assert_eq!(sink.load(&records).unwrap(), 3);

    let path = temp_dir.path().join("kings_laws.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(parsed["collection"], "kings_laws");
    assert_eq!(parsed["records"][1]["metadata"]["LawId"], "2");
}

fn segmenter() -> Command {
    let mut cmd = Command::cargo_bin("westeros-segmenter").unwrap();
    cmd.env_remove("WESTEROS_COLLECTION")
        .env_remove("WESTEROS_OUTPUT_FORMAT")
        .env_remove("WESTEROS_OUTPUT_DIR");
    cmd
}

#[test]
fn test_cli_segment_to_stdout() {
    segmenter()
        .arg("segment")
        .arg(fixture_path("laws.txt"))
        .args(["--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Section\":\"Law 1 – The Crown\""))
        .stdout(predicate::str::contains("Law 3").not())
        .stderr(predicate::str::contains("Laws: "));
}

#[test]
fn test_cli_segment_to_directory() {
    let temp_dir = tempdir().unwrap();

    segmenter()
        .arg("segment")
        .arg(fixture_path("laws.txt"))
        .arg("--output")
        .arg(temp_dir.path())
        .args(["--collection", "kings_laws"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved to:"));

    let yaml = fs::read_to_string(temp_dir.path().join("kings_laws.yaml")).unwrap();
    assert!(yaml.contains("collection: kings_laws"));
}

#[test]
fn test_cli_require_laws_fails_on_empty_document() {
    segmenter()
        .arg("segment")
        .arg(fixture_path("preface.txt"))
        .arg("--require-laws")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No laws found in preface.txt"));
}

#[test]
fn test_cli_missing_input() {
    segmenter()
        .args(["segment", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to read source"));
}

#[test]
fn test_cli_inspect_single_law() {
    segmenter()
        .arg("inspect")
        .arg(fixture_path("laws.txt"))
        .args(["--law", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Law 2 – The Night's Watch"))
        .stdout(predicate::str::contains("    2.1.1. Deserters forfeit their lives."))
        .stdout(predicate::str::contains("The Crown").not());
}

#[test]
fn test_cli_inspect_unknown_law() {
    segmenter()
        .arg("inspect")
        .arg(fixture_path("laws.txt"))
        .args(["--law", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Law 3 not found in laws.txt"));
}
