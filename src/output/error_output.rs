//! Stderr helpers for fatal errors and best-effort warnings.

use std::io::{IsTerminal, Write};

use super::text::ansi;

fn stderr_supports_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Prints a fatal error message.
///
/// Format: `✖ Error: {message}`
pub fn print_error(message: &str) {
    let mut stderr = std::io::stderr().lock();
    // Discard write errors: failing to write to stderr while reporting an
    // error cannot be recovered from here.
    if stderr_supports_color() {
        let _ = writeln!(
            stderr,
            "{}{}✖ Error:{} {message}",
            ansi::BOLD,
            ansi::RED,
            ansi::RESET
        );
    } else {
        let _ = writeln!(stderr, "✖ Error: {message}");
    }
}

/// Prints a warning message.
///
/// Format: `⚠ Warning: {message}`
pub fn print_warning(message: &str) {
    let mut stderr = std::io::stderr().lock();
    if stderr_supports_color() {
        let _ = writeln!(
            stderr,
            "{}⚠ Warning:{} {message}",
            ansi::BOLD,
            ansi::RESET
        );
    } else {
        let _ = writeln!(stderr, "⚠ Warning: {message}");
    }
}
