//! Classification result models.
//!
//! This module contains the [`ClassificationReport`] type and its associated
//! structures that capture the outputs of classifying a batch of activity
//! records, including the audit steps that explain each decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ActiveTab, RecordFeatures, UnifiedStatus, VerdictKey};

/// A single step in the audit trail recording a classification decision.
///
/// Each step captures the rule that was applied, the inputs it saw, the
/// outcome and a human-readable reasoning.
///
/// # Example
///
/// ```
/// use activity_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "inactive".to_string(),
///     rule_name: "No Activity".to_string(),
///     input: serde_json::json!({"crm_hours": "0", "discord_hours": "0"}),
///     output: serde_json::json!({"status": "inactive"}),
///     reasoning: "No CRM or voice time recorded".to_string(),
/// };
/// assert_eq!(step.rule_id, "inactive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Both classifications of one record, with the features they were based on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordClassification {
    /// Grouping key of the employee (Discord id or lowercase name).
    pub employee_key: String,
    /// Display name from the record.
    pub name: String,
    /// Record date as supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Seven-state status.
    pub status: UnifiedStatus,
    /// Fourteen-state legacy verdict.
    pub legacy_verdict: VerdictKey,
    /// Extracted features.
    pub features: RecordFeatures,
    /// Target resolution and rule decisions, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// The result of classifying a batch of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Unique identifier for this classification run.
    pub classification_id: Uuid,
    /// When the classification was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the classification.
    pub engine_version: String,
    /// The tab the records were classified for.
    pub active_tab: ActiveTab,
    /// One entry per input record, in input order.
    pub results: Vec<RecordClassification>,
    /// The total classification duration in microseconds.
    pub duration_us: u64,
}
