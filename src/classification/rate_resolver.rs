//! Daily target resolution.
//!
//! This module maps an employee's pay-rate multiplier to the number of hours
//! they are expected to log per day, honoring named overrides and a record's
//! precomputed target.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{EngineConfig, RatesConfig};
use crate::models::{ActivityRecord, AuditStep, HourTarget};

use super::time_aggregator::numeric_value;

/// Where a resolved target came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// The record's own `targetTime`.
    RecordOverride,
    /// A named employee override.
    NamedOverride,
    /// A rate bucket.
    RateBucket,
    /// The configured fallback for missing or unrecognized rates.
    Fallback,
}

/// The result of a target lookup, including the target and audit step.
#[derive(Debug, Clone)]
pub struct TargetLookupResult {
    /// The resolved target.
    pub target: HourTarget,
    /// Where the target came from; `None` when no requirement applies.
    pub source: Option<TargetSource>,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the daily target for a name and rate.
///
/// Evaluated top to bottom, first match wins:
/// 1. A named override whose name equals the trimmed `name`
/// 2. The first bucket (highest `min_rate` first) with `rate >= min_rate`
/// 3. `fallback_hours`, or no requirement when that is unset
///
/// # Example
///
/// ```
/// use activity_engine::classification::resolve_target_hours;
/// use activity_engine::config::RatesConfig;
/// use activity_engine::models::HourTarget;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RatesConfig::default();
/// let rate = Decimal::from_str("0.99").unwrap();
///
/// assert_eq!(
///     resolve_target_hours("Anna", Some(rate), &rates).0,
///     HourTarget::Required(Decimal::from(6))
/// );
/// assert_eq!(resolve_target_hours("Anna", None, &rates).0, HourTarget::NoRequirement);
/// ```
pub fn resolve_target_hours(
    name: &str,
    rate: Option<Decimal>,
    rates: &RatesConfig,
) -> (HourTarget, Option<TargetSource>) {
    let name = name.trim();
    if let Some(named) = rates.named_overrides.iter().find(|n| n.name.trim() == name) {
        return (
            HourTarget::Required(named.target_hours),
            Some(TargetSource::NamedOverride),
        );
    }

    if let Some(rate) = rate {
        if let Some(bucket) = rates.buckets.iter().find(|b| rate >= b.min_rate) {
            return (
                HourTarget::Required(bucket.target_hours),
                Some(TargetSource::RateBucket),
            );
        }
    }

    match rates.fallback_hours {
        Some(hours) => (HourTarget::Required(hours), Some(TargetSource::Fallback)),
        None => (HourTarget::NoRequirement, None),
    }
}

/// Resolves the daily target for a record and records an audit step.
///
/// A numeric `target_time` on the record takes precedence over rate
/// resolution. An unparseable `rate` is treated as missing.
pub fn resolve_record_target(
    record: &ActivityRecord,
    config: &EngineConfig,
    step_number: u32,
) -> TargetLookupResult {
    let rate = record.rate.as_ref().and_then(numeric_value);
    let record_override = record.target_time.as_ref().and_then(numeric_value);

    let (target, source) = match record_override {
        Some(hours) => (HourTarget::Required(hours), Some(TargetSource::RecordOverride)),
        None => resolve_target_hours(&record.name, rate, config.rates()),
    };

    debug!(
        employee = %record.name.trim(),
        target_hours = ?target.hours(),
        source = ?source,
        "Resolved daily target"
    );

    let reasoning = match (source, target) {
        (Some(TargetSource::RecordOverride), HourTarget::Required(hours)) => {
            format!("Using record target override of {} hours", hours.normalize())
        }
        (Some(TargetSource::NamedOverride), HourTarget::Required(hours)) => format!(
            "Named override for '{}' requires {} hours",
            record.name.trim(),
            hours.normalize()
        ),
        (Some(TargetSource::RateBucket), HourTarget::Required(hours)) => format!(
            "Rate {} falls in the {} hour bucket",
            rate.map(|r| r.normalize().to_string())
                .unwrap_or_default(),
            hours.normalize()
        ),
        (Some(TargetSource::Fallback), HourTarget::Required(hours)) => format!(
            "Rate {} is missing or unrecognized, using fallback of {} hours",
            describe_rate(rate),
            hours.normalize()
        ),
        _ => format!(
            "Rate {} is missing or unrecognized, no hour requirement applies",
            describe_rate(rate)
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "target_resolution".to_string(),
        rule_name: "Daily Target Resolution".to_string(),
        input: serde_json::json!({
            "name": record.name,
            "rate": rate.map(|r| r.normalize().to_string()),
            "target_time": record_override.map(|h| h.normalize().to_string())
        }),
        output: serde_json::json!({
            "target_hours": target.hours().map(|h| h.normalize().to_string()),
            "source": source
        }),
        reasoning,
    };

    TargetLookupResult {
        target,
        source,
        audit_step,
    }
}

fn describe_rate(rate: Option<Decimal>) -> String {
    match rate {
        Some(rate) => rate.normalize().to_string(),
        None => "(none)".to_string(),
    }
}
