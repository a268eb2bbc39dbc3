use super::*;

fn validate_collecting(folder: &str) -> (NamingParts, Vec<Violation>) {
    let mut violations = Vec::new();
    let parts = validate(folder, &mut violations);
    (parts, violations)
}

#[test]
fn valid_folder_name_passes() {
    let (parts, violations) = validate_collecting("2025-10-03-liaoweichieh");
    assert!(violations.is_empty());
    assert_eq!(parts.date, "2025-10-03");
    assert_eq!(parts.identifier, "liaoweichieh");
}

#[test]
fn hyphenated_identifier_passes() {
    let (parts, violations) = validate_collecting("2025-10-03-liao-wei-chieh");
    assert!(violations.is_empty());
    assert_eq!(parts.identifier, "liao-wei-chieh");
}

#[test]
fn month_13_fails_date_only() {
    let (_, violations) = validate_collecting("2025-13-01-liaoweichieh");
    assert_eq!(
        violations,
        vec![Violation::InvalidDate {
            date: "2025-13-01".to_string()
        }]
    );
}

#[test]
fn day_32_fails_date() {
    let (_, violations) = validate_collecting("2025-01-32-someone");
    assert_eq!(
        violations,
        vec![Violation::InvalidDate {
            date: "2025-01-32".to_string()
        }]
    );
}

#[test]
fn day_31_in_february_passes() {
    // Not calendar-aware, reproduced as specified.
    let (_, violations) = validate_collecting("2025-02-31-someone");
    assert!(violations.is_empty());
}

#[test]
fn uppercase_identifier_fails_identifier_only() {
    let (_, violations) = validate_collecting("2025-10-03-LiaoWeiChieh");
    assert_eq!(
        violations,
        vec![Violation::InvalidIdentifier {
            identifier: "LiaoWeiChieh".to_string()
        }]
    );
}

#[test]
fn single_digit_month_fails_shape() {
    let (_, violations) = validate_collecting("2025-1-03-someone");
    assert_eq!(
        violations,
        vec![Violation::InvalidDate {
            date: "2025-1-03".to_string()
        }]
    );
}

#[test]
fn too_few_parts_reports_shape_and_subchecks() {
    let (parts, violations) = validate_collecting("hello");
    assert_eq!(parts.date, "hello");
    assert_eq!(parts.identifier, "");
    assert_eq!(violations.len(), 3);
    assert!(matches!(violations[0], Violation::FolderNameShape { .. }));
    assert!(matches!(violations[1], Violation::InvalidDate { .. }));
    assert!(matches!(violations[2], Violation::InvalidIdentifier { .. }));
}

#[test]
fn three_parts_is_still_too_few() {
    let (parts, violations) = validate_collecting("2025-10-03");
    assert_eq!(parts.date, "2025-10-03");
    assert_eq!(parts.identifier, "");
    // Shape violation plus the empty identifier; the date itself is fine.
    assert_eq!(violations.len(), 2);
    assert!(matches!(violations[0], Violation::FolderNameShape { .. }));
    assert!(matches!(violations[1], Violation::InvalidIdentifier { .. }));
}

#[test]
fn split_keeps_extra_parts_in_identifier() {
    let parts = split_folder_name("2025-10-03-a-b-c");
    assert_eq!(parts.date, "2025-10-03");
    assert_eq!(parts.identifier, "a-b-c");
}

#[test]
fn identifier_with_underscore_fails() {
    let (_, violations) = validate_collecting("2025-10-03-liao_wei");
    assert_eq!(
        violations,
        vec![Violation::InvalidIdentifier {
            identifier: "liao_wei".to_string()
        }]
    );
}
