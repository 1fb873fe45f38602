//! Batch classification of activity records.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::{ActiveTab, ActivityRecord, ClassificationReport, RecordClassification};

use super::employee_aggregator::employee_key;
use super::features::extract_features_with_audit;
use super::legacy_verdict::legacy_verdict_audited;
use super::unified_status::classify_features_audited;

/// Classifies a single record with both classifiers.
///
/// The audit trace has three steps: target resolution, the unified rule
/// that fired and the legacy rule that fired.
///
/// # Example
///
/// ```
/// use activity_engine::classification::classify_record;
/// use activity_engine::config::EngineConfig;
/// use activity_engine::models::{ActiveTab, ActivityRecord, UnifiedStatus, VerdictKey};
///
/// let result = classify_record(
///     &ActivityRecord::new("Anna"),
///     ActiveTab::Company,
///     &EngineConfig::default(),
/// );
///
/// assert_eq!(result.status, UnifiedStatus::Inactive);
/// assert_eq!(result.legacy_verdict, VerdictKey::Inactive);
/// assert_eq!(result.audit_steps.len(), 3);
/// ```
pub fn classify_record(
    record: &ActivityRecord,
    tab: ActiveTab,
    config: &EngineConfig,
) -> RecordClassification {
    let (features, target_step) = extract_features_with_audit(record, config, 1);
    let unified = classify_features_audited(&features, tab, 2);
    let (legacy_verdict, legacy_step) = legacy_verdict_audited(&features, 3);

    RecordClassification {
        employee_key: employee_key(record).to_string(),
        name: record.name.trim().to_string(),
        date: record.date.clone(),
        status: unified.status,
        legacy_verdict,
        features,
        audit_steps: vec![target_step, unified.audit_step, legacy_step],
    }
}

/// Classifies every record for a tab, preserving input order.
pub fn classify_records(
    records: &[ActivityRecord],
    tab: ActiveTab,
    config: &EngineConfig,
) -> ClassificationReport {
    let start_time = Instant::now();

    let results: Vec<RecordClassification> = records
        .iter()
        .map(|record| classify_record(record, tab, config))
        .collect();

    let duration_us = elapsed_micros(start_time.elapsed());
    info!(
        records = results.len(),
        tab = ?tab,
        duration_us = duration_us,
        "Classified activity records"
    );

    ClassificationReport {
        classification_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        active_tab: tab,
        results,
        duration_us,
    }
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
fn elapsed_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
