//! Feature extraction.

use crate::config::EngineConfig;
use crate::models::{ActivityRecord, AuditStep, RecordFeatures};

use super::leave_classifier::classify_leave;
use super::project_classifier::classify_track;
use super::rate_resolver::resolve_record_target;
use super::report_validator::validate_report;
use super::time_aggregator::aggregate_time;

/// Extracts every classification signal from a record.
///
/// # Example
///
/// ```
/// use activity_engine::classification::extract_features;
/// use activity_engine::config::EngineConfig;
/// use activity_engine::models::{ActivityRecord, HourTarget, NumericField};
/// use rust_decimal::Decimal;
///
/// let mut record = ActivityRecord::new("Anna");
/// record.crm_time = Some(NumericField::from("3,5"));
/// record.discord_time = Some(NumericField::from("4"));
/// record.rate = Some(NumericField::from(1.0));
///
/// let features = extract_features(&record, &EngineConfig::default());
/// assert_eq!(features.total_hours, Decimal::new(75, 1));
/// assert_eq!(features.target, HourTarget::Required(Decimal::from(8)));
/// ```
pub fn extract_features(record: &ActivityRecord, config: &EngineConfig) -> RecordFeatures {
    extract_features_with_audit(record, config, 1).0
}

/// Extracts features and returns the target-resolution audit step alongside.
pub fn extract_features_with_audit(
    record: &ActivityRecord,
    config: &EngineConfig,
    step_number: u32,
) -> (RecordFeatures, AuditStep) {
    let totals = aggregate_time(record);
    let target = resolve_record_target(record, config, step_number);

    let features = RecordFeatures {
        crm_hours: totals.crm_hours,
        discord_hours: totals.discord_hours,
        total_hours: totals.total_hours,
        target: target.target,
        report: validate_report(record.report.as_deref(), config.report_min_chars()),
        leave: classify_leave(record.leave_rate.as_ref()),
        track: classify_track(record, config.project_keywords()),
    };

    (features, target.audit_step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HourTarget, LeaveStatus, NumericField, ReportStatus, WorkTrack};
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_record_features() {
        let features = extract_features(&ActivityRecord::new("Anna"), &EngineConfig::default());

        assert_eq!(features.crm_hours, Decimal::ZERO);
        assert_eq!(features.discord_hours, Decimal::ZERO);
        assert_eq!(features.total_hours, Decimal::ZERO);
        assert_eq!(features.target, HourTarget::NoRequirement);
        assert_eq!(features.report, ReportStatus::Empty);
        assert_eq!(features.leave, LeaveStatus::NoLeave);
        assert_eq!(features.track, WorkTrack::Standard);
    }

    #[test]
    fn test_full_record_features() {
        let mut record = ActivityRecord::new("Anna");
        record.crm_time = Some(NumericField::from("2"));
        record.computed_hours = Some(NumericField::Number(5.0));
        record.discord_time = Some(NumericField::from("3"));
        record.rate = Some(NumericField::Number(0.75));
        record.report = Some("Reviewed the onboarding flow and fixed two bugs".to_string());
        record.leave_rate = Some(NumericField::from("0,5"));
        record.employee_status = Some("Part Project".to_string());

        let (features, step) = extract_features_with_audit(&record, &EngineConfig::default(), 2);

        assert_eq!(features.crm_hours, Decimal::from(5));
        assert_eq!(features.total_hours, Decimal::from(8));
        assert_eq!(features.target, HourTarget::Required(Decimal::from(6)));
        assert_eq!(features.report, ReportStatus::Valid);
        assert_eq!(features.leave, LeaveStatus::HalfDay);
        assert_eq!(features.track, WorkTrack::Project);
        assert_eq!(step.step_number, 2);
    }
}
