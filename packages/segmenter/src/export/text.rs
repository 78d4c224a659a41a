//! Human-readable outline of segmented laws.

use textwrap::{fill, Options};

use crate::segmentation::format_subsections;
use crate::types::Law;

/// Wrap one rendered subsection line at `width`, keeping its indentation on
/// every continuation line.
pub fn wrap_rendered_line(line: &str, width: usize) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let options = Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    fill(body, &options)
}

/// Render a law as a titled, wrapped subsection tree.
///
/// ```text
/// Law 10 – Watch
///   10.1. Patrol the wall each night.
///     10.1.1. Carry a torch.
/// ```
pub fn render_outline(law: &Law, width: usize) -> String {
    let mut out = vec![law.section_label()];
    out.extend(
        format_subsections(&law.paragraphs)
            .iter()
            .map(|line| wrap_rendered_line(line, width)),
    );
    out.join("\n")
}
