//! Per-employee aggregation and overview models.
//!
//! [`EmployeeAggregate`] groups one employee's records inside a date window.
//! [`Overview`] is the summary handed to consumers: one
//! [`EmployeeSummary`] per employee plus [`StatusCounts`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ActiveTab, ActivityRecord, DateRange, DateWindow, RecordFeatures, UnifiedStatus};

/// Key identifying one employee across records.
///
/// # Example
///
/// ```
/// use activity_engine::models::EmployeeKey;
///
/// assert_eq!(EmployeeKey::Discord("4711".to_string()).to_string(), "4711");
/// assert_eq!(EmployeeKey::Name("anna".to_string()).to_string(), "anna");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EmployeeKey {
    /// Keyed by Discord id.
    Discord(String),
    /// Keyed by lowercase name.
    Name(String),
}

impl std::fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeKey::Discord(id) => f.write_str(id),
            EmployeeKey::Name(name) => f.write_str(name),
        }
    }
}

/// One record inside an aggregate, with its parsed date and features.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedEntry {
    /// Parsed record date; `None` when the date text was unparseable.
    pub date: Option<NaiveDate>,
    /// The source record.
    pub record: ActivityRecord,
    /// Features extracted from the record.
    pub features: RecordFeatures,
}

/// One employee's records within a date window.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeAggregate {
    /// Grouping key.
    pub key: EmployeeKey,
    /// Display name from the first record seen.
    pub name: String,
    /// Department from the first record carrying one.
    pub department: Option<String>,
    /// Profession from the first record carrying one.
    pub profession: Option<String>,
    /// Records ordered by date; undated records last.
    pub entries: Vec<AggregatedEntry>,
    /// Sum of each record's total hours.
    pub total_hours: Decimal,
    /// Sum of each record's target hours, not deduplicated.
    pub target_hours: Decimal,
    /// True if any record has a valid report.
    pub has_valid_report: bool,
}

/// The resolved status of one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStatus {
    /// The day; `None` groups records with unparseable dates.
    pub date: Option<NaiveDate>,
    /// Worst status among that day's records.
    pub status: UnifiedStatus,
    /// Number of records that day.
    pub record_count: usize,
}

/// One employee's line in an overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Grouping key.
    pub key: EmployeeKey,
    /// Display name.
    pub name: String,
    /// Department label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Profession label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    /// Summed hours across the window.
    pub total_hours: Decimal,
    /// Summed targets across the window.
    pub target_hours: Decimal,
    /// True if any record in the window has a valid report.
    pub has_valid_report: bool,
    /// Status for the whole window.
    pub status: UnifiedStatus,
    /// Per-day worst statuses, in date order.
    pub days: Vec<DailyStatus>,
}

/// Number of employees per status.
///
/// # Example
///
/// ```
/// use activity_engine::models::{StatusCounts, UnifiedStatus};
///
/// let mut counts = StatusCounts::default();
/// counts.record(UnifiedStatus::Ok);
/// counts.record(UnifiedStatus::Project);
///
/// assert_eq!(counts.get(UnifiedStatus::Ok), 1);
/// assert_eq!(counts.total(), 2);
/// assert_eq!(counts.company_total(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Employees with `ok`.
    pub ok: usize,
    /// Employees with `hoursProblems`.
    pub hours_problems: usize,
    /// Employees with `reportProblems`.
    pub report_problems: usize,
    /// Employees with `totalProblems`.
    pub total_problems: usize,
    /// Employees with `inactive`.
    pub inactive: usize,
    /// Employees with `leave`.
    pub leave: usize,
    /// Employees with `project`.
    pub project: usize,
}

impl StatusCounts {
    /// Increments the counter for `status`.
    pub fn record(&mut self, status: UnifiedStatus) {
        *self.slot(status) += 1;
    }

    /// Returns the counter for `status`.
    pub fn get(&self, status: UnifiedStatus) -> usize {
        match status {
            UnifiedStatus::Ok => self.ok,
            UnifiedStatus::HoursProblems => self.hours_problems,
            UnifiedStatus::ReportProblems => self.report_problems,
            UnifiedStatus::TotalProblems => self.total_problems,
            UnifiedStatus::Inactive => self.inactive,
            UnifiedStatus::Leave => self.leave,
            UnifiedStatus::Project => self.project,
        }
    }

    /// Sum of every counter.
    pub fn total(&self) -> usize {
        UnifiedStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// Sum of every counter except `project`.
    pub fn company_total(&self) -> usize {
        self.total() - self.project
    }

    fn slot(&mut self, status: UnifiedStatus) -> &mut usize {
        match status {
            UnifiedStatus::Ok => &mut self.ok,
            UnifiedStatus::HoursProblems => &mut self.hours_problems,
            UnifiedStatus::ReportProblems => &mut self.report_problems,
            UnifiedStatus::TotalProblems => &mut self.total_problems,
            UnifiedStatus::Inactive => &mut self.inactive,
            UnifiedStatus::Leave => &mut self.leave,
            UnifiedStatus::Project => &mut self.project,
        }
    }
}

/// Overview of every employee for one range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// The requested range.
    pub range: DateRange,
    /// The resolved window; `None` for [`DateRange::All`].
    pub window: Option<DateWindow>,
    /// The tab statuses were resolved for.
    pub active_tab: ActiveTab,
    /// One summary per employee, in first-seen order.
    pub employees: Vec<EmployeeSummary>,
    /// Employees per status.
    pub counts: StatusCounts,
}
