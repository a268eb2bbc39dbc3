use std::fmt::Write;

use crate::rules::{RunSummary, ValidationReport};

use super::ReportFormatter;

/// Renders the report as the pull request comment body.
///
/// Pass and fail share one layout: a verdict line, the violation list when
/// there is one, and the summary table of what the guard observed.
pub struct CommentFormatter;

impl CommentFormatter {
    fn write_summary_table(output: &mut String, summary: &RunSummary) {
        let shown = |value: &Option<String>| match value {
            Some(v) if !v.is_empty() => format!("`{v}`"),
            _ => "-".to_string(),
        };
        let yes_no = |b: bool| if b { "yes" } else { "no" };

        writeln!(output, "| Check | Observed |").ok();
        writeln!(output, "|-------|----------|").ok();
        writeln!(output, "| Folder | {} |", shown(&summary.folder)).ok();
        writeln!(output, "| Date | {} |", shown(&summary.date_part)).ok();
        writeln!(output, "| Identifier | {} |", shown(&summary.identifier_part)).ok();
        writeln!(output, "| Changed files | {} |", summary.file_count).ok();
        writeln!(
            output,
            "| index.html | {} |",
            yes_no(summary.has_required_file)
        )
        .ok();
        writeln!(output, "| .png files | {} |", summary.png_count).ok();
        writeln!(output, "| .css files | {} |", summary.css_count).ok();
    }
}

impl ReportFormatter for CommentFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        writeln!(output, "## Sign-in check\n").ok();

        if report.passed {
            writeln!(output, "✅ **All checks passed.** Welcome aboard!\n").ok();
        } else {
            writeln!(
                output,
                "❌ **{} problem(s) found.** Please fix all of them and push again:\n",
                report.violations.len()
            )
            .ok();
            for violation in &report.violations {
                writeln!(output, "- {violation}").ok();
            }
            writeln!(output).ok();
        }

        Self::write_summary_table(&mut output, &report.summary);

        output
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
