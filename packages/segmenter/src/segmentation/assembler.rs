//! Document assembly: one record per law for the indexer.

use crate::types::{Law, LawRecord};

/// Join a law's rendered lines into its record.
///
/// Lines are joined with single spaces and the result is trimmed. An empty
/// body still produces a record; emptiness is reported by the pipeline.
#[must_use]
pub fn assemble_record<S: AsRef<str>>(law: &Law, lines: &[S]) -> LawRecord {
    let text = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
        .trim()
        .to_string();
    LawRecord::new(law, text)
}
