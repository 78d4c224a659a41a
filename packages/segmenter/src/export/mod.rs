//! Output generation for segmented laws.

mod text;
mod writer;

pub use text::{render_outline, wrap_rendered_line};
pub use writer::{
    generate_json, generate_json_lines, generate_yaml, render_records, save_records,
    validate_output_dir,
};
