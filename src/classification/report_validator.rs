//! Daily report heuristic.
//!
//! A report counts as valid when its trimmed text reaches a minimum length.
//! This is a placeholder for content checks, so the minimum comes from
//! configuration (`report.min_chars`, default 40).

use crate::models::ReportStatus;

/// Classifies report text against the minimum length.
///
/// Length is counted in characters after trimming surrounding whitespace.
///
/// # Example
///
/// ```
/// use activity_engine::classification::validate_report;
/// use activity_engine::models::ReportStatus;
///
/// assert_eq!(validate_report(None, 40), ReportStatus::Empty);
/// assert_eq!(validate_report(Some("   "), 40), ReportStatus::Empty);
/// assert_eq!(validate_report(Some("done"), 40), ReportStatus::TooShort { length: 4 });
/// assert_eq!(validate_report(Some(&"x".repeat(40)), 40), ReportStatus::Valid);
/// ```
pub fn validate_report(text: Option<&str>, min_chars: usize) -> ReportStatus {
    let trimmed = text.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return ReportStatus::Empty;
    }

    let length = trimmed.chars().count();
    if length >= min_chars {
        ReportStatus::Valid
    } else {
        ReportStatus::TooShort { length }
    }
}

/// Returns true if the report text is long enough to count.
pub fn is_valid_report(text: Option<&str>, min_chars: usize) -> bool {
    validate_report(text, min_chars).is_valid()
}
