//! Project-track detection.

use crate::models::{ActivityRecord, WorkTrack};

/// Determines whether a record belongs to the project track.
///
/// An explicit `is_project: true` wins. Otherwise the status text
/// (`employee_status`, or `current_status` when that is empty) is lowercased
/// and searched for any of `keywords`, which must already be lowercase.
///
/// # Example
///
/// ```
/// use activity_engine::classification::classify_track;
/// use activity_engine::config::EngineConfig;
/// use activity_engine::models::{ActivityRecord, WorkTrack};
///
/// let config = EngineConfig::default();
/// let mut record = ActivityRecord::new("Anna");
/// record.employee_status = Some("Part Project (CRM)".to_string());
///
/// assert_eq!(classify_track(&record, config.project_keywords()), WorkTrack::Project);
/// ```
pub fn classify_track(record: &ActivityRecord, keywords: &[String]) -> WorkTrack {
    if record.is_project == Some(true) {
        return WorkTrack::Project;
    }

    let matches_keyword = record
        .status_text()
        .map(str::to_lowercase)
        .is_some_and(|status| keywords.iter().any(|k| status.contains(k.as_str())));

    if matches_keyword {
        WorkTrack::Project
    } else {
        WorkTrack::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn track(record: &ActivityRecord) -> WorkTrack {
        classify_track(record, EngineConfig::default().project_keywords())
    }

    #[test]
    fn test_explicit_flag_marks_project() {
        let mut record = ActivityRecord::new("Anna");
        record.is_project = Some(true);
        assert_eq!(track(&record), WorkTrack::Project);
    }

    #[test]
    fn test_explicit_false_still_checks_status_text() {
        let mut record = ActivityRecord::new("Anna");
        record.is_project = Some(false);
        record.employee_status = Some("project".to_string());
        assert_eq!(track(&record), WorkTrack::Project);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut record = ActivityRecord::new("Anna");
        record.employee_status = Some("PROJECT".to_string());
        assert_eq!(track(&record), WorkTrack::Project);
    }

    #[test]
    fn test_part_project_variants_match() {
        for status in ["part-project", "Part project", "on part-project since May"] {
            let mut record = ActivityRecord::new("Anna");
            record.employee_status = Some(status.to_string());
            assert_eq!(track(&record), WorkTrack::Project, "status {:?}", status);
        }
    }

    #[test]
    fn test_current_status_used_when_employee_status_empty() {
        let mut record = ActivityRecord::new("Anna");
        record.employee_status = Some(String::new());
        record.current_status = Some("Project".to_string());
        assert_eq!(track(&record), WorkTrack::Project);
    }

    #[test]
    fn test_current_status_ignored_when_employee_status_present() {
        let mut record = ActivityRecord::new("Anna");
        record.employee_status = Some("Active".to_string());
        record.current_status = Some("Project".to_string());
        assert_eq!(track(&record), WorkTrack::Standard);
    }

    #[test]
    fn test_no_status_is_standard() {
        assert_eq!(track(&ActivityRecord::new("Anna")), WorkTrack::Standard);
    }

    #[test]
    fn test_project_does_not_imply_leave() {
        let mut record = ActivityRecord::new("Anna");
        record.is_project = Some(true);
        let leave = crate::classification::classify_leave(record.leave_rate.as_ref());
        assert_eq!(leave, crate::models::LeaveStatus::NoLeave);
    }
}
