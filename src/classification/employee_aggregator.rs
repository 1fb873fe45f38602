//! Per-employee aggregation inside a date window.
//!
//! Records are grouped by [`EmployeeKey`]: the Discord id when present,
//! otherwise the lowercased name. Employees keep the order in which they
//! first appear; each employee's entries are sorted by date with undated
//! entries last.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{
    ActivityRecord, AggregatedEntry, DateWindow, EmployeeAggregate, EmployeeKey, HourTarget,
    LeaveStatus, RecordFeatures, ReportStatus, WorkTrack,
};

use super::features::extract_features;
use super::windowing::{in_window, parse_record_date};

/// Returns the grouping key of a record.
///
/// # Example
///
/// ```
/// use activity_engine::classification::employee_key;
/// use activity_engine::models::{ActivityRecord, EmployeeKey};
///
/// let mut record = ActivityRecord::new("Anna Petrova");
/// assert_eq!(employee_key(&record), EmployeeKey::Name("anna petrova".to_string()));
///
/// record.discord_id = Some("4711".to_string());
/// assert_eq!(employee_key(&record), EmployeeKey::Discord("4711".to_string()));
/// ```
pub fn employee_key(record: &ActivityRecord) -> EmployeeKey {
    match record.discord_id() {
        Some(id) => EmployeeKey::Discord(id.to_string()),
        None => EmployeeKey::Name(record.name.trim().to_lowercase()),
    }
}

/// Groups records into per-employee aggregates.
///
/// Only records inside `window` are kept; `None` keeps everything. Totals
/// are plain sums over the kept records saturating at the `Decimal` bounds,
/// targets are summed per record without deduplication, and the report flag is true if any kept record
/// has a valid report.
pub fn aggregate_records(
    records: &[ActivityRecord],
    window: Option<&DateWindow>,
    config: &EngineConfig,
) -> Vec<EmployeeAggregate> {
    let mut aggregates: Vec<EmployeeAggregate> = Vec::new();
    let mut index: HashMap<EmployeeKey, usize> = HashMap::new();

    for record in records {
        let date = record.date.as_deref().and_then(parse_record_date);
        if !in_window(date, window) {
            continue;
        }

        let key = employee_key(record);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            aggregates.push(EmployeeAggregate {
                key,
                name: record.name.trim().to_string(),
                department: None,
                profession: None,
                entries: Vec::new(),
                total_hours: Decimal::ZERO,
                target_hours: Decimal::ZERO,
                has_valid_report: false,
            });
            aggregates.len() - 1
        });

        let aggregate = &mut aggregates[slot];
        let features = extract_features(record, config);

        aggregate.total_hours = aggregate.total_hours.saturating_add(features.total_hours);
        aggregate.target_hours = aggregate
            .target_hours
            .saturating_add(features.target.hours().unwrap_or(Decimal::ZERO));
        aggregate.has_valid_report |= features.report.is_valid();
        if aggregate.department.is_none() {
            aggregate.department = non_blank(record.department.as_deref());
        }
        if aggregate.profession.is_none() {
            aggregate.profession = non_blank(record.profession.as_deref());
        }

        aggregate.entries.push(AggregatedEntry {
            date,
            record: record.clone(),
            features,
        });
    }

    for aggregate in &mut aggregates {
        aggregate
            .entries
            .sort_by_key(|entry| (entry.date.is_none(), entry.date));
    }

    debug!(
        records = records.len(),
        employees = aggregates.len(),
        "Aggregated activity records"
    );

    aggregates
}

/// Combines an aggregate's entries into one feature set.
///
/// Hours are summed, as are the targets of entries not on leave. The target
/// stays unresolved only if no such entry had one. The report is valid if any entry's is. Leave holds only
/// when every entry is on leave, and is full only when every entry is a full
/// day. The track is project if any entry is.
pub fn combined_features(aggregate: &EmployeeAggregate) -> RecordFeatures {
    combine(aggregate.entries.iter().map(|entry| &entry.features))
}

fn combine<'a, I>(features: I) -> RecordFeatures
where
    I: IntoIterator<Item = &'a RecordFeatures>,
{
    let mut crm_hours = Decimal::ZERO;
    let mut discord_hours = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;
    let mut target: Option<Decimal> = None;
    let mut report = ReportStatus::Empty;
    let mut all_full_leave = true;
    let mut all_on_leave = true;
    let mut any_project = false;
    let mut count = 0usize;

    for f in features {
        count += 1;
        crm_hours = crm_hours.saturating_add(f.crm_hours);
        discord_hours = discord_hours.saturating_add(f.discord_hours);
        total_hours = total_hours.saturating_add(f.total_hours);
        // Leave days carry no hour requirement.
        if let Some(hours) = f.target.hours().filter(|_| !f.leave.is_on_leave()) {
            target = Some(target.unwrap_or(Decimal::ZERO).saturating_add(hours));
        }
        report = better_report(report, f.report);
        all_full_leave &= f.leave == LeaveStatus::FullLeave;
        all_on_leave &= f.leave.is_on_leave();
        any_project |= f.is_project();
    }

    let leave = match (count, all_full_leave, all_on_leave) {
        (0, _, _) => LeaveStatus::NoLeave,
        (_, true, _) => LeaveStatus::FullLeave,
        (_, _, true) => LeaveStatus::HalfDay,
        _ => LeaveStatus::NoLeave,
    };

    RecordFeatures {
        crm_hours,
        discord_hours,
        total_hours,
        target: target.map_or(HourTarget::NoRequirement, HourTarget::Required),
        report,
        leave,
        track: if any_project {
            WorkTrack::Project
        } else {
            WorkTrack::Standard
        },
    }
}

fn better_report(current: ReportStatus, next: ReportStatus) -> ReportStatus {
    match (current, next) {
        (ReportStatus::Valid, _) | (_, ReportStatus::Valid) => ReportStatus::Valid,
        (ReportStatus::TooShort { length: a }, ReportStatus::TooShort { length: b }) => {
            ReportStatus::TooShort { length: a.max(b) }
        }
        (ReportStatus::TooShort { length }, ReportStatus::Empty)
        | (ReportStatus::Empty, ReportStatus::TooShort { length }) => {
            ReportStatus::TooShort { length }
        }
        (ReportStatus::Empty, ReportStatus::Empty) => ReportStatus::Empty,
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::resolve_window;
    use crate::models::{DateRange, NumericField};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, day: &str, crm: &str, discord: &str, report: &str) -> ActivityRecord {
        let mut record = ActivityRecord::new(name);
        record.date = Some(day.to_string());
        record.crm_time = Some(NumericField::from(crm));
        record.discord_time = Some(NumericField::from(discord));
        record.rate = Some(NumericField::Number(1.0));
        record.report = Some(report.to_string());
        record
    }

    fn long_report() -> String {
        "Closed three tickets and reviewed the release notes".to_string()
    }

    #[test]
    fn test_week_with_one_valid_report_has_valid_report() {
        let records = vec![
            record("Anna", "2026-01-12", "4", "4", ""),
            record("Anna", "2026-01-14", "4", "4", &long_report()),
        ];
        let window = resolve_window(DateRange::Week, date(2026, 1, 15)).unwrap();

        let aggregates = aggregate_records(&records, Some(&window), &EngineConfig::default());
        assert_eq!(aggregates.len(), 1);
        assert!(aggregates[0].has_valid_report);
        assert_eq!(aggregates[0].total_hours, Decimal::from(16));
        assert_eq!(aggregates[0].target_hours, Decimal::from(16));
    }

    #[test]
    fn test_records_outside_window_are_dropped() {
        let records = vec![
            record("Anna", "2026-01-12", "4", "4", ""),
            record("Anna", "2026-01-19", "4", "4", &long_report()),
            record("Anna", "not a date", "4", "4", &long_report()),
        ];
        let window = resolve_window(DateRange::Week, date(2026, 1, 12)).unwrap();

        let aggregates = aggregate_records(&records, Some(&window), &EngineConfig::default());
        assert_eq!(aggregates[0].entries.len(), 1);
        assert!(!aggregates[0].has_valid_report);
    }

    #[test]
    fn test_all_range_keeps_undated_records_last() {
        let records = vec![
            record("Anna", "garbage", "1", "1", ""),
            record("Anna", "2026-01-14", "1", "1", ""),
            record("Anna", "2026-01-12", "1", "1", ""),
        ];

        let aggregates = aggregate_records(&records, None, &EngineConfig::default());
        let dates: Vec<_> = aggregates[0].entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![Some(date(2026, 1, 12)), Some(date(2026, 1, 14)), None]
        );
    }

    #[test]
    fn test_grouping_by_discord_id_then_lowercase_name() {
        let mut renamed = record("Anna P.", "2026-01-12", "1", "1", "");
        renamed.discord_id = Some("4711".to_string());
        let mut original = record("Anna Petrova", "2026-01-13", "1", "1", "");
        original.discord_id = Some("4711".to_string());

        let records = vec![
            renamed,
            record("Boris", "2026-01-12", "1", "1", ""),
            original,
            record("BORIS ", "2026-01-13", "1", "1", ""),
        ];

        let aggregates = aggregate_records(&records, None, &EngineConfig::default());
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].key, EmployeeKey::Discord("4711".to_string()));
        assert_eq!(aggregates[0].name, "Anna P.");
        assert_eq!(aggregates[0].entries.len(), 2);
        assert_eq!(aggregates[1].key, EmployeeKey::Name("boris".to_string()));
        assert_eq!(aggregates[1].entries.len(), 2);
    }

    #[test]
    fn test_blank_discord_id_falls_back_to_name() {
        let mut r = record("Anna", "2026-01-12", "1", "1", "");
        r.discord_id = Some("  ".to_string());
        assert_eq!(employee_key(&r), EmployeeKey::Name("anna".to_string()));
    }

    #[test]
    fn test_department_taken_from_first_non_blank_record() {
        let mut first = record("Anna", "2026-01-12", "1", "1", "");
        first.department = Some(" ".to_string());
        let mut second = record("Anna", "2026-01-13", "1", "1", "");
        second.department = Some("Sales".to_string());

        let aggregates = aggregate_records(&[first, second], None, &EngineConfig::default());
        assert_eq!(aggregates[0].department.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_combined_features() {
        let mut on_leave = record("Anna", "2026-01-13", "0", "0", "");
        on_leave.leave_rate = Some(NumericField::from("1"));
        let mut project = record("Anna", "2026-01-14", "3", "2", "too short");
        project.is_project = Some(true);

        let records = vec![
            record("Anna", "2026-01-12", "4", "4", &long_report()),
            on_leave,
            project,
        ];
        let aggregates = aggregate_records(&records, None, &EngineConfig::default());
        let combined = combined_features(&aggregates[0]);

        assert_eq!(combined.crm_hours, Decimal::from(7));
        assert_eq!(combined.discord_hours, Decimal::from(6));
        assert_eq!(combined.total_hours, Decimal::from(13));
        assert_eq!(combined.target, HourTarget::Required(Decimal::from(16)));
        assert_eq!(combined.report, ReportStatus::Valid);
        assert_eq!(combined.leave, LeaveStatus::NoLeave);
        assert_eq!(combined.track, WorkTrack::Project);
    }

    #[test]
    fn test_combined_target_skips_leave_days() {
        let mut full = record("Anna", "2026-01-12", "0", "0", "");
        full.leave_rate = Some(NumericField::from("1"));
        let mut half = record("Anna", "2026-01-13", "2", "2", "");
        half.leave_rate = Some(NumericField::from("0.5"));
        let records = vec![full, half, record("Anna", "2026-01-14", "4", "4", "")];

        let aggregates = aggregate_records(&records, None, &EngineConfig::default());
        assert_eq!(aggregates[0].target_hours, Decimal::from(24));
        assert_eq!(
            combined_features(&aggregates[0]).target,
            HourTarget::Required(Decimal::from(8))
        );
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let huge = "79228162514264337593543950335";
        let records = vec![
            record("Anna", "2026-01-12", huge, "0", ""),
            record("Anna", "2026-01-13", huge, "0", ""),
        ];

        let aggregates = aggregate_records(&records, None, &EngineConfig::default());
        assert_eq!(aggregates[0].total_hours, Decimal::MAX);
        assert_eq!(combined_features(&aggregates[0]).total_hours, Decimal::MAX);
    }

    #[test]
    fn test_combined_leave_requires_every_entry() {
        let mut full = record("Anna", "2026-01-12", "0", "0", "");
        full.leave_rate = Some(NumericField::from("1"));
        let mut half = record("Anna", "2026-01-13", "2", "2", "");
        half.leave_rate = Some(NumericField::from("0.5"));

        let config = EngineConfig::default();
        let both_full = aggregate_records(&[full.clone(), full.clone()], None, &config);
        assert_eq!(combined_features(&both_full[0]).leave, LeaveStatus::FullLeave);

        let mixed = aggregate_records(&[full, half], None, &config);
        assert_eq!(combined_features(&mixed[0]).leave, LeaveStatus::HalfDay);
    }

    #[test]
    fn test_combined_report_keeps_longest_short_report() {
        let records = vec![
            record("Anna", "2026-01-12", "1", "1", "short"),
            record("Anna", "2026-01-13", "1", "1", "a bit longer"),
            record("Anna", "2026-01-14", "1", "1", ""),
        ];
        let aggregates = aggregate_records(&records, None, &EngineConfig::default());
        assert_eq!(
            combined_features(&aggregates[0]).report,
            ReportStatus::TooShort { length: 12 }
        );
    }

    #[test]
    fn test_combined_target_unresolved_without_rates() {
        let mut r = record("Anna", "2026-01-12", "1", "1", "");
        r.rate = None;
        let aggregates = aggregate_records(&[r], None, &EngineConfig::default());
        assert_eq!(aggregates[0].target_hours, Decimal::ZERO);
        assert_eq!(
            combined_features(&aggregates[0]).target,
            HourTarget::NoRequirement
        );
    }
}
