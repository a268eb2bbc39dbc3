use std::fmt::Write;

use crate::rules::ValidationReport;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(super) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn verdict_line(&self, report: &ValidationReport) -> String {
        let (icon, word, color) = if report.passed {
            ("✓", "PASSED", ansi::GREEN)
        } else {
            ("✗", "FAILED", ansi::RED)
        };

        if self.use_colors {
            format!("{icon} {}{color}{word}{}", ansi::BOLD, ansi::RESET)
        } else {
            format!("{icon} {word}")
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        writeln!(output, "{}", self.verdict_line(report)).ok();

        for violation in &report.violations {
            writeln!(output, "  ✗ {violation}").ok();
        }

        let summary = &report.summary;
        if let Some(folder) = &summary.folder {
            writeln!(output, "  folder: {folder}").ok();
        }
        writeln!(
            output,
            "  files: {} (index.html: {}, png: {}, css: {})",
            summary.file_count,
            if summary.has_required_file { "yes" } else { "no" },
            summary.png_count,
            summary.css_count
        )
        .ok();

        if self.verbose > 0 {
            let date = summary.date_part.as_deref().unwrap_or("-");
            let identifier = summary.identifier_part.as_deref().unwrap_or("-");
            writeln!(output, "  date: {date}  identifier: {identifier}").ok();
        }

        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
