use crate::github::ChangeRecord;

use super::{SIZE_LIMIT_BYTES, Violation};

/// Byte-size lookup keyed by a content reference.
///
/// Production code resolves this against the head repository's blob store;
/// tests inject a fake.
pub trait SizeLookup {
    /// Byte size of the content behind `content_ref`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot report a numeric size.
    fn byte_size(&self, content_ref: &str) -> crate::error::Result<u64>;
}

/// Check one record's byte size against the fixed ceiling.
///
/// A missing content reference, a failed lookup and an oversize file each
/// record their own violation; none aborts the remaining checks.
pub fn check(record: &ChangeRecord, sizes: &impl SizeLookup, violations: &mut Vec<Violation>) {
    let Some(content_ref) = record.content_ref.as_deref() else {
        violations.push(Violation::MissingContentRef {
            path: record.path.clone(),
        });
        return;
    };

    match sizes.byte_size(content_ref) {
        Err(e) => violations.push(Violation::SizeUnavailable {
            path: record.path.clone(),
            reason: e.to_string(),
        }),
        Ok(size) if size > SIZE_LIMIT_BYTES => violations.push(Violation::Oversize {
            path: record.path.clone(),
            size,
        }),
        Ok(_) => {}
    }
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
