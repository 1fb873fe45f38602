//! Request types for the Activity Engine API.
//!
//! This module defines the JSON request bodies for the `/classify` and
//! `/overview` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ActiveTab, ActivityRecord, DateRange};

/// Request body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The tab the records are viewed from. Defaults to `company`.
    #[serde(default)]
    pub active_tab: ActiveTab,
    /// The records to classify.
    pub records: Vec<ActivityRecord>,
}

/// Request body for the `/overview` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewRequest {
    /// The tab the records are viewed from. Defaults to `company`.
    #[serde(default)]
    pub active_tab: ActiveTab,
    /// The date range to summarize. Defaults to `day`.
    #[serde(default)]
    pub range: DateRange,
    /// The anchor date; required unless `range` is `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_date: Option<NaiveDate>,
    /// The records to summarize.
    pub records: Vec<ActivityRecord>,
}

/// Rejects records that cannot be attributed to an employee.
///
/// Every other field degrades gracefully during classification, but a blank
/// name leaves nothing to group or report on.
pub fn validate_records(records: &[ActivityRecord]) -> EngineResult<()> {
    match records.iter().position(|r| r.name.trim().is_empty()) {
        Some(index) => Err(EngineError::InvalidRecord {
            field: format!("records[{}].name", index),
            message: "name must not be empty".to_string(),
        }),
        None => Ok(()),
    }
}
