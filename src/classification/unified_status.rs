//! Seven-state unified status classification.
//!
//! Rules are evaluated in table order and the first match wins:
//!
//! | # | Rule | Status |
//! |---|------|--------|
//! | 1 | Full or half-day leave | `leave` |
//! | 2 | Project tab, project record, valid report | `ok` |
//! | 3 | Project tab, project record | `reportProblems` |
//! | 4 | No CRM and no voice hours | `inactive` |
//! | 5 | No CRM hours, voice hours meet target | `totalProblems` |
//! | 6 | No voice hours, CRM hours meet target | `totalProblems` |
//! | 7 | Hours shortfall and invalid report | `totalProblems` |
//! | 8 | Hours shortfall | `hoursProblems` |
//! | 9 | Invalid report | `reportProblems` |
//! | - | Otherwise | `ok` |
//!
//! Project records on the company tab skip rules 2 and 3 and are judged like
//! everyone else. "Meets target" needs a positive target; a record without
//! a target always has an hours shortfall unless its total meets one.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{ActiveTab, ActivityRecord, AuditStep, RecordFeatures, UnifiedStatus};

use super::features::extract_features;
use super::rules::{Fallback, Rule, RuleMatch, evaluate};

/// Inputs to the unified rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifiedContext {
    /// Extracted record features.
    pub features: RecordFeatures,
    /// The tab the record is viewed from.
    pub tab: ActiveTab,
}

impl UnifiedContext {
    fn on_project_tab(&self) -> bool {
        self.tab == ActiveTab::Project && self.features.is_project()
    }

    /// Total hours short of target while at least one channel is short.
    fn has_hours_problems(&self) -> bool {
        let f = &self.features;
        !f.target.is_met_by(f.total_hours)
            && (f.target.is_missed_by(f.crm_hours) || f.target.is_missed_by(f.discord_hours))
    }

    fn has_report_problems(&self) -> bool {
        !self.features.report.is_valid()
    }
}

/// The unified status decided for a record, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedClassification {
    /// The decided status.
    pub status: UnifiedStatus,
    /// The audit step naming the rule that fired.
    pub audit_step: AuditStep,
}

fn on_leave(ctx: &UnifiedContext) -> bool {
    ctx.features.leave.is_on_leave()
}

fn project_tab_with_report(ctx: &UnifiedContext) -> bool {
    ctx.on_project_tab() && ctx.features.report.is_valid()
}

fn project_tab(ctx: &UnifiedContext) -> bool {
    ctx.on_project_tab()
}

fn no_activity(ctx: &UnifiedContext) -> bool {
    ctx.features.crm_hours == Decimal::ZERO && ctx.features.discord_hours == Decimal::ZERO
}

fn crm_missing(ctx: &UnifiedContext) -> bool {
    let f = &ctx.features;
    f.crm_hours == Decimal::ZERO && f.target.is_met_by(f.discord_hours)
}

fn discord_missing(ctx: &UnifiedContext) -> bool {
    let f = &ctx.features;
    f.discord_hours == Decimal::ZERO && f.target.is_met_by(f.crm_hours)
}

fn hours_and_report(ctx: &UnifiedContext) -> bool {
    ctx.has_hours_problems() && ctx.has_report_problems()
}

fn hours_only(ctx: &UnifiedContext) -> bool {
    ctx.has_hours_problems()
}

fn report_only(ctx: &UnifiedContext) -> bool {
    ctx.has_report_problems()
}

/// The unified priority table.
pub static UNIFIED_RULES: &[Rule<UnifiedContext, UnifiedStatus>] = &[
    Rule {
        id: "leave",
        name: "Leave",
        applies: on_leave,
        outcome: UnifiedStatus::Leave,
        reasoning: "Employee is on full or half-day leave",
    },
    Rule {
        id: "project_tab_reported",
        name: "Project Track With Report",
        applies: project_tab_with_report,
        outcome: UnifiedStatus::Ok,
        reasoning: "Project employee on the project tab submitted a valid report",
    },
    Rule {
        id: "project_tab_unreported",
        name: "Project Track Without Report",
        applies: project_tab,
        outcome: UnifiedStatus::ReportProblems,
        reasoning: "Project employee on the project tab has no valid report",
    },
    Rule {
        id: "inactive",
        name: "No Activity",
        applies: no_activity,
        outcome: UnifiedStatus::Inactive,
        reasoning: "No CRM hours and no voice hours were logged",
    },
    Rule {
        id: "crm_missing",
        name: "CRM Time Missing",
        applies: crm_missing,
        outcome: UnifiedStatus::TotalProblems,
        reasoning: "Voice hours meet the target but no CRM hours were logged",
    },
    Rule {
        id: "discord_missing",
        name: "Voice Time Missing",
        applies: discord_missing,
        outcome: UnifiedStatus::TotalProblems,
        reasoning: "CRM hours meet the target but no voice hours were logged",
    },
    Rule {
        id: "hours_and_report",
        name: "Hours And Report Problems",
        applies: hours_and_report,
        outcome: UnifiedStatus::TotalProblems,
        reasoning: "Hours fall short of the target and the report is invalid",
    },
    Rule {
        id: "hours",
        name: "Hours Problems",
        applies: hours_only,
        outcome: UnifiedStatus::HoursProblems,
        reasoning: "Hours fall short of the target",
    },
    Rule {
        id: "report",
        name: "Report Problems",
        applies: report_only,
        outcome: UnifiedStatus::ReportProblems,
        reasoning: "The daily report is missing or too short",
    },
];

const UNIFIED_FALLBACK: Fallback<UnifiedStatus> = Fallback {
    id: "ok",
    name: "All Requirements Met",
    outcome: UnifiedStatus::Ok,
    reasoning: "Hours meet the target and the report is valid",
};

fn decide(features: &RecordFeatures, tab: ActiveTab) -> RuleMatch<UnifiedStatus> {
    let ctx = UnifiedContext {
        features: *features,
        tab,
    };
    let decided = evaluate(UNIFIED_RULES, &ctx, &UNIFIED_FALLBACK);
    debug!(rule = decided.id, status = %decided.outcome, tab = ?tab, "Unified status decided");
    decided
}

/// Classifies extracted features for a tab.
pub fn classify_features(features: &RecordFeatures, tab: ActiveTab) -> UnifiedStatus {
    decide(features, tab).outcome
}

/// Classifies extracted features and records the rule that fired.
pub fn classify_features_audited(
    features: &RecordFeatures,
    tab: ActiveTab,
    step_number: u32,
) -> UnifiedClassification {
    let decided = decide(features, tab);
    UnifiedClassification {
        status: decided.outcome,
        audit_step: decided.audit_step(step_number, features, serde_json::json!({ "tab": tab })),
    }
}

/// Classifies a record into exactly one unified status.
///
/// # Example
///
/// ```
/// use activity_engine::classification::classify;
/// use activity_engine::config::EngineConfig;
/// use activity_engine::models::{ActiveTab, ActivityRecord, NumericField, UnifiedStatus};
///
/// let config = EngineConfig::default();
/// let mut record = ActivityRecord::new("Anna");
/// record.crm_time = Some(NumericField::from("0"));
/// record.discord_time = Some(NumericField::from("9"));
/// record.rate = Some(NumericField::from(1.0));
///
/// assert_eq!(classify(&record, ActiveTab::Company, &config), UnifiedStatus::TotalProblems);
/// ```
pub fn classify(record: &ActivityRecord, tab: ActiveTab, config: &EngineConfig) -> UnifiedStatus {
    classify_features(&extract_features(record, config), tab)
}
