//! Report rendering: console, plain text, markdown, JSON and HTML

pub mod formatter;
pub mod report;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{render_cover_letter_preview, render_text_report, RoastReport};
