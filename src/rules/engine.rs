//! Fixed-order, collect-all evaluation of one pull request's changes.

use indexmap::IndexSet;
use serde::Serialize;

use crate::github::{ChangeRecord, ChangeStatus};

use super::path::Classification;
use super::{CONTRIBUTION_ROOT, SizeLookup, Violation, naming, path, size, whitelist};

/// Metadata derived while checking, echoed back in the report so a
/// contributor can see what the guard actually observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub folder: Option<String>,
    pub date_part: Option<String>,
    pub identifier_part: Option<String>,
    pub file_count: usize,
    pub has_required_file: bool,
    pub png_count: usize,
    pub css_count: usize,
}

/// Immutable result of one evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub violations: Vec<Violation>,
    pub summary: RunSummary,
}

/// Evaluate the full rule sequence over a pull request's change records.
///
/// Every step runs unconditionally and appends to the same accumulator;
/// no step short-circuits on earlier failures, so one run reports every
/// problem at once. The relative order of violations follows the step
/// order below and is part of the contract.
#[must_use]
pub fn evaluate(records: &[ChangeRecord], sizes: &impl SizeLookup) -> ValidationReport {
    let mut violations = Vec::new();

    // 1. Scope & mutation: everything must be an addition under the root.
    check_scope(records, &mut violations);

    // 2. Classify every path and collect distinct claimed folders in
    //    first-seen order.
    let classified = classify_all(records, &mut violations);
    let folders: IndexSet<String> = classified
        .iter()
        .filter_map(|c| c.as_ref().map(|c| c.folder.clone()))
        .collect();

    // 3. Single-folder invariant. On violation the first folder still
    //    feeds the remaining checks so the report stays complete.
    check_single_folder(&folders, &mut violations);
    let chosen = folders.first().cloned();

    let mut summary = RunSummary {
        file_count: records.len(),
        ..RunSummary::default()
    };

    if let Some(folder) = &chosen {
        // 4. Folder name grammar.
        let parts = naming::validate(folder, &mut violations);

        // 5. Containment: re-assert every record lives inside the chosen
        //    folder. Overlaps with earlier structural checks by design;
        //    duplicate-sounding messages are accepted.
        check_containment(records, folder, &mut violations);

        // 6. Filename whitelist inside the chosen folder.
        let tally = check_whitelist(&classified, folder, &mut violations);

        summary.folder = Some(folder.clone());
        summary.date_part = Some(parts.date);
        summary.identifier_part = Some(parts.identifier);
        summary.has_required_file = tally.has_required_file;
        summary.png_count = tally.png_count;
        summary.css_count = tally.css_count;
    }

    // 7. Size ceiling over every record, whatever its classification.
    for record in records {
        size::check(record, sizes, &mut violations);
    }

    // 8. Verdict.
    ValidationReport {
        passed: violations.is_empty(),
        violations,
        summary,
    }
}

fn check_scope(records: &[ChangeRecord], violations: &mut Vec<Violation>) {
    let root_prefix = format!("{CONTRIBUTION_ROOT}/");
    for record in records {
        if !record.path.starts_with(&root_prefix) {
            violations.push(Violation::OutsideRoot {
                path: record.path.clone(),
            });
        }
        if record.status != ChangeStatus::Added {
            violations.push(Violation::NotAnAddition {
                path: record.path.clone(),
                status: record.status.to_string(),
            });
        }
    }
}

fn classify_all(
    records: &[ChangeRecord],
    violations: &mut Vec<Violation>,
) -> Vec<Option<Classification>> {
    records
        .iter()
        .map(|record| {
            let (classification, violation) = path::classify(&record.path);
            violations.extend(violation);
            classification
        })
        .collect()
}

fn check_single_folder(folders: &IndexSet<String>, violations: &mut Vec<Violation>) {
    if folders.is_empty() {
        violations.push(Violation::NoFolder);
    } else if folders.len() > 1 {
        violations.push(Violation::MultipleFolders {
            folders: folders.iter().cloned().collect(),
        });
    }
}

fn check_containment(records: &[ChangeRecord], folder: &str, violations: &mut Vec<Violation>) {
    let folder_prefix = format!("{CONTRIBUTION_ROOT}/{folder}/");
    for record in records {
        if !record.path.starts_with(&folder_prefix) {
            violations.push(Violation::OutsideFolder {
                path: record.path.clone(),
                folder: folder.to_string(),
            });
        }
    }
}

fn check_whitelist(
    classified: &[Option<Classification>],
    folder: &str,
    violations: &mut Vec<Violation>,
) -> whitelist::FileWhitelist {
    let mut tally = whitelist::FileWhitelist::new();
    for classification in classified.iter().flatten() {
        if classification.folder == folder {
            tally.observe(&classification.filename, violations);
        }
    }
    tally.finish(folder, violations);
    tally
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
