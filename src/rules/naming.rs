use std::sync::LazyLock;

use regex::Regex;

use super::Violation;

/// `yyyy-mm-dd` shape; month and day bounds are checked separately.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());

/// Lowercase alphanumeric with hyphens, nothing else.
static IDENTIFIER_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// How many leading hyphen-separated parts form the date.
const DATE_PARTS: usize = 3;

/// Minimum hyphen-separated parts of a valid folder name
/// (`yyyy`, `mm`, `dd`, identifier...).
const MIN_PARTS: usize = 4;

/// The date and identifier substrings derived from a folder name.
///
/// Both are always populated with whatever could be derived, even for
/// malformed names, so the report can show what was actually seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingParts {
    pub date: String,
    pub identifier: String,
}

/// Split a folder name into its date and identifier parts.
#[must_use]
pub fn split_folder_name(folder: &str) -> NamingParts {
    let parts: Vec<&str> = folder.split('-').collect();
    let date_end = parts.len().min(DATE_PARTS);

    NamingParts {
        date: parts[..date_end].join("-"),
        identifier: parts[date_end..].join("-"),
    }
}

/// Validate a folder name against the `date + identifier` grammar.
///
/// Fewer than four hyphen-separated parts is itself a violation, and the
/// date/identifier sub-checks still run on whatever could be derived, each
/// adding its own violation when invalid. No normalization is performed.
pub fn validate(folder: &str, violations: &mut Vec<Violation>) -> NamingParts {
    let part_count = folder.split('-').count();
    if part_count < MIN_PARTS {
        violations.push(Violation::FolderNameShape {
            folder: folder.to_string(),
        });
    }

    let parts = split_folder_name(folder);

    if !is_valid_date(&parts.date) {
        violations.push(Violation::InvalidDate {
            date: parts.date.clone(),
        });
    }
    if !IDENTIFIER_SHAPE.is_match(&parts.identifier) {
        violations.push(Violation::InvalidIdentifier {
            identifier: parts.identifier.clone(),
        });
    }

    parts
}

/// Strict shape plus month 1-12 and day 1-31. Deliberately not
/// calendar-aware: 2025-02-31 passes.
fn is_valid_date(date: &str) -> bool {
    let Some(caps) = DATE_SHAPE.captures(date) else {
        return false;
    };

    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);

    (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
