//! Range overviews: per-employee summaries and status counts.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ActiveTab, ActivityRecord, DailyStatus, DateRange, EmployeeAggregate, EmployeeSummary,
    Overview, StatusCounts,
};

use super::employee_aggregator::{aggregate_records, combined_features};
use super::unified_status::classify_features;
use super::windowing::resolve_window;
use super::worst_status::worst_status;

/// Builds the overview of `records` for a range around `anchor`.
///
/// For [`DateRange::Day`] each employee's status is the worst status among
/// their records that day. For longer ranges it is the unified status of
/// their combined features. Every summary also lists the worst status of
/// each day in the window.
///
/// # Errors
///
/// Returns [`EngineError::MissingAnchorDate`] when `range` is bounded and no
/// anchor is given.
///
/// # Example
///
/// ```
/// use activity_engine::classification::build_overview;
/// use activity_engine::config::EngineConfig;
/// use activity_engine::models::{ActiveTab, ActivityRecord, DateRange, UnifiedStatus};
/// use chrono::NaiveDate;
///
/// let mut record = ActivityRecord::new("Anna");
/// record.date = Some("2026-01-15".to_string());
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 1, 15);
/// let overview = build_overview(
///     &[record],
///     ActiveTab::Company,
///     DateRange::Day,
///     anchor,
///     &EngineConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(overview.employees.len(), 1);
/// assert_eq!(overview.counts.get(UnifiedStatus::Inactive), 1);
/// ```
pub fn build_overview(
    records: &[ActivityRecord],
    tab: ActiveTab,
    range: DateRange,
    anchor: Option<NaiveDate>,
    config: &EngineConfig,
) -> EngineResult<Overview> {
    let window = match range {
        DateRange::All => None,
        _ => {
            let anchor = anchor.ok_or_else(|| EngineError::MissingAnchorDate {
                range: range.to_string(),
            })?;
            resolve_window(range, anchor)
        }
    };

    let aggregates = aggregate_records(records, window.as_ref(), config);

    let mut counts = StatusCounts::default();
    let employees: Vec<EmployeeSummary> = aggregates
        .into_iter()
        .map(|aggregate| {
            let summary = summarize(aggregate, tab, range);
            counts.record(summary.status);
            debug!(employee = %summary.key, status = %summary.status, "Employee summarized");
            summary
        })
        .collect();

    info!(
        range = %range,
        tab = ?tab,
        records = records.len(),
        employees = employees.len(),
        "Overview built"
    );

    Ok(Overview {
        range,
        window,
        active_tab: tab,
        employees,
        counts,
    })
}

fn summarize(aggregate: EmployeeAggregate, tab: ActiveTab, range: DateRange) -> EmployeeSummary {
    let days = daily_statuses(&aggregate, tab);

    let combined = || classify_features(&combined_features(&aggregate), tab);
    let status = match range {
        DateRange::Day => {
            worst_status(days.iter().map(|day| day.status)).unwrap_or_else(combined)
        }
        _ => combined(),
    };

    EmployeeSummary {
        key: aggregate.key,
        name: aggregate.name,
        department: aggregate.department,
        profession: aggregate.profession,
        total_hours: aggregate.total_hours,
        target_hours: aggregate.target_hours,
        has_valid_report: aggregate.has_valid_report,
        status,
        days,
    }
}

/// Worst status per date; entries are already date-sorted.
fn daily_statuses(aggregate: &EmployeeAggregate, tab: ActiveTab) -> Vec<DailyStatus> {
    let mut days: Vec<DailyStatus> = Vec::new();

    for entry in &aggregate.entries {
        let status = classify_features(&entry.features, tab);
        match days.last_mut() {
            Some(day) if day.date == entry.date => {
                day.status = worst_status([day.status, status]).unwrap_or(status);
                day.record_count += 1;
            }
            _ => days.push(DailyStatus {
                date: entry.date,
                status,
                record_count: 1,
            }),
        }
    }

    days
}
