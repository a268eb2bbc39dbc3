use super::{REQUIRED_FILE, Violation};

/// Per-extension cap for the optional files.
const OPTIONAL_CAP: usize = 1;

/// Running tally of the filenames seen inside the claimed folder.
///
/// Counters are never decremented; the tally is finalized once with
/// [`FileWhitelist::finish`] after every filename has been observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileWhitelist {
    pub has_required_file: bool,
    pub png_count: usize,
    pub css_count: usize,
}

impl FileWhitelist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one filename, recording a violation the moment a cap is
    /// exceeded or a disallowed name is seen. Earlier occurrences are never
    /// retroactively un-flagged.
    pub fn observe(&mut self, filename: &str, violations: &mut Vec<Violation>) {
        if filename == REQUIRED_FILE {
            // Duplicate entries are tallied independently; seeing the
            // required file again is not a violation.
            self.has_required_file = true;
            return;
        }

        match extension_lowercase(filename).as_deref() {
            Some("png") => {
                self.png_count += 1;
                if self.png_count > OPTIONAL_CAP {
                    violations.push(Violation::ExtraOptionalFile {
                        file: filename.to_string(),
                        extension: "png".to_string(),
                    });
                }
            }
            Some("css") => {
                self.css_count += 1;
                if self.css_count > OPTIONAL_CAP {
                    violations.push(Violation::ExtraOptionalFile {
                        file: filename.to_string(),
                        extension: "css".to_string(),
                    });
                }
            }
            _ => violations.push(Violation::DisallowedFile {
                file: filename.to_string(),
            }),
        }
    }

    /// Final check once all filenames are processed: the required file
    /// missing entirely is a single terminal violation.
    pub fn finish(&self, folder: &str, violations: &mut Vec<Violation>) {
        if !self.has_required_file {
            violations.push(Violation::MissingRequiredFile {
                folder: folder.to_string(),
            });
        }
    }
}

/// Extension after the last dot, lowercased. Comparison is
/// case-insensitive on the extension only, never on the stem.
fn extension_lowercase(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
#[path = "whitelist_tests.rs"]
mod tests;
