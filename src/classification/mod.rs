//! Classification logic for the Activity Engine.
//!
//! This module contains the functions that turn raw activity records into
//! statuses: defensive hour parsing, daily target resolution, the report
//! heuristic, leave and project-track detection, the unified and legacy rule
//! tables, date windowing, per-employee aggregation, worst-status resolution
//! and range overviews.

mod batch;
mod employee_aggregator;
mod features;
mod leave_classifier;
mod legacy_verdict;
mod overview;
mod project_classifier;
mod rate_resolver;
mod report_validator;
mod rules;
mod time_aggregator;
mod unified_status;
mod windowing;
mod worst_status;

pub use batch::{classify_record, classify_records};
pub use employee_aggregator::{aggregate_records, combined_features, employee_key};
pub use features::{extract_features, extract_features_with_audit};
pub use leave_classifier::classify_leave;
pub use legacy_verdict::{
    LEGACY_RULES, legacy_verdict, legacy_verdict_audited, legacy_verdict_for,
};
pub use overview::build_overview;
pub use project_classifier::classify_track;
pub use rate_resolver::{
    TargetLookupResult, TargetSource, resolve_record_target, resolve_target_hours,
};
pub use report_validator::{is_valid_report, validate_report};
pub use rules::{Fallback, Rule, RuleMatch, evaluate, first_match};
pub use time_aggregator::{
    TimeTotals, aggregate_time, crm_hours, discord_hours, numeric_value, parse_hours,
};
pub use unified_status::{
    UNIFIED_RULES, UnifiedClassification, UnifiedContext, classify, classify_features,
    classify_features_audited,
};
pub use windowing::{in_window, parse_record_date, resolve_window};
pub use worst_status::{severity_rank, worst_status};
