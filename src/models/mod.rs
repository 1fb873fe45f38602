//! Core data models for the Activity Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod activity_record;
mod aggregate;
mod classification_result;
mod date_window;
mod features;
mod status;

pub use activity_record::{ActivityRecord, NumericField};
pub use aggregate::{
    AggregatedEntry, DailyStatus, EmployeeAggregate, EmployeeKey, EmployeeSummary, Overview,
    StatusCounts,
};
pub use classification_result::{AuditStep, ClassificationReport, RecordClassification};
pub use date_window::{DateRange, DateWindow};
pub use features::{HourTarget, LeaveStatus, RecordFeatures, ReportStatus, WorkTrack};
pub use status::{ActiveTab, UnifiedStatus, VerdictKey};
