mod error_output;
mod markdown;
mod text;

pub use error_output::{print_error, print_warning};
pub use markdown::CommentFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::rules::ValidationReport;

/// Trait for rendering a validation report into an output representation.
pub trait ReportFormatter {
    /// Render the report into a string.
    fn format(&self, report: &ValidationReport) -> String;
}
