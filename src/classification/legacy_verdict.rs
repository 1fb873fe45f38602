//! Fourteen-state legacy verdicts.
//!
//! The legacy table predates the unified status and is evaluated on its own.
//! It does not look at the active tab, and project records short-circuit
//! before any hour checks. Verdicts are not expected to agree with
//! [`UnifiedStatus`](crate::models::UnifiedStatus).
//!
//! When total hours fall short of a positive target, a channel is blamed
//! if it carries less than half of the target.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{
    ActivityRecord, AuditStep, HourTarget, LeaveStatus, RecordFeatures, VerdictKey,
};

use super::features::extract_features;
use super::rules::{Fallback, Rule, RuleMatch, evaluate};

/// Half of the target when total hours fall short of it.
fn channel_share(f: &RecordFeatures) -> Option<Decimal> {
    match f.target {
        HourTarget::Required(target) if target > Decimal::ZERO && f.total_hours < target => {
            Some(target / Decimal::TWO)
        }
        _ => None,
    }
}

fn idle(f: &RecordFeatures) -> bool {
    f.crm_hours == Decimal::ZERO && f.discord_hours == Decimal::ZERO
}

fn full_leave(f: &RecordFeatures) -> bool {
    f.leave == LeaveStatus::FullLeave
}

fn half_day(f: &RecordFeatures) -> bool {
    f.leave == LeaveStatus::HalfDay
}

fn idle_project(f: &RecordFeatures) -> bool {
    f.is_project() && idle(f)
}

fn project(f: &RecordFeatures) -> bool {
    f.is_project()
}

fn no_crm(f: &RecordFeatures) -> bool {
    f.crm_hours == Decimal::ZERO
}

fn no_discord(f: &RecordFeatures) -> bool {
    f.discord_hours == Decimal::ZERO
}

fn low_both(f: &RecordFeatures) -> bool {
    channel_share(f).is_some_and(|share| f.crm_hours < share && f.discord_hours < share)
}

fn low_crm(f: &RecordFeatures) -> bool {
    channel_share(f).is_some_and(|share| f.crm_hours < share)
}

fn low_discord(f: &RecordFeatures) -> bool {
    channel_share(f).is_some_and(|share| f.discord_hours < share)
}

fn no_report(f: &RecordFeatures) -> bool {
    !f.report.is_valid()
}

fn target_met_with_report(f: &RecordFeatures) -> bool {
    matches!(f.target, HourTarget::Required(_)) && f.report.is_valid()
}

fn reported_without_target(f: &RecordFeatures) -> bool {
    f.target == HourTarget::NoRequirement && f.report.is_valid()
}

/// The legacy priority table.
pub static LEGACY_RULES: &[Rule<RecordFeatures, VerdictKey>] = &[
    Rule {
        id: "legacy_leave",
        name: "Full Leave",
        applies: full_leave,
        outcome: VerdictKey::Leave,
        reasoning: "Leave rate covers the full day",
    },
    Rule {
        id: "legacy_half_day",
        name: "Half-Day Leave",
        applies: half_day,
        outcome: VerdictKey::HalfDay,
        reasoning: "Leave rate covers part of the day",
    },
    Rule {
        id: "legacy_project_inactive",
        name: "Idle Project Employee",
        applies: idle_project,
        outcome: VerdictKey::ProjectInactive,
        reasoning: "Project employee logged no CRM or voice hours",
    },
    Rule {
        id: "legacy_project",
        name: "Project Employee",
        applies: project,
        outcome: VerdictKey::Project,
        reasoning: "Project employee with logged activity",
    },
    Rule {
        id: "legacy_inactive",
        name: "No Activity",
        applies: idle,
        outcome: VerdictKey::Inactive,
        reasoning: "No CRM hours and no voice hours were logged",
    },
    Rule {
        id: "legacy_no_crm",
        name: "No CRM Time",
        applies: no_crm,
        outcome: VerdictKey::NoCrm,
        reasoning: "No CRM hours were logged",
    },
    Rule {
        id: "legacy_no_discord",
        name: "No Voice Time",
        applies: no_discord,
        outcome: VerdictKey::NoDiscord,
        reasoning: "No voice hours were logged",
    },
    Rule {
        id: "legacy_low_both",
        name: "Both Channels Low",
        applies: low_both,
        outcome: VerdictKey::LowBoth,
        reasoning: "Total is short and both channels carry under half the target",
    },
    Rule {
        id: "legacy_low_crm",
        name: "CRM Time Low",
        applies: low_crm,
        outcome: VerdictKey::LowCrm,
        reasoning: "Total is short and CRM carries under half the target",
    },
    Rule {
        id: "legacy_low_discord",
        name: "Voice Time Low",
        applies: low_discord,
        outcome: VerdictKey::LowDiscord,
        reasoning: "Total is short and voice carries under half the target",
    },
    Rule {
        id: "legacy_no_report",
        name: "No Report",
        applies: no_report,
        outcome: VerdictKey::NoReport,
        reasoning: "The daily report is missing or too short",
    },
    Rule {
        id: "legacy_ok",
        name: "Target Met",
        applies: target_met_with_report,
        outcome: VerdictKey::Ok,
        reasoning: "Hours meet the target and the report is valid",
    },
    Rule {
        id: "legacy_work",
        name: "Working Without Target",
        applies: reported_without_target,
        outcome: VerdictKey::Work,
        reasoning: "Activity and a valid report without a resolvable target",
    },
];

const LEGACY_FALLBACK: Fallback<VerdictKey> = Fallback {
    id: "legacy_check",
    name: "Needs Review",
    outcome: VerdictKey::Check,
    reasoning: "No legacy rule matched",
};

fn decide(features: &RecordFeatures) -> RuleMatch<VerdictKey> {
    let decided = evaluate(LEGACY_RULES, features, &LEGACY_FALLBACK);
    debug!(rule = decided.id, verdict = %decided.outcome, "Legacy verdict decided");
    decided
}

/// Returns the legacy verdict for extracted features.
pub fn legacy_verdict_for(features: &RecordFeatures) -> VerdictKey {
    decide(features).outcome
}

/// Returns the legacy verdict with the audit step naming the rule that fired.
pub fn legacy_verdict_audited(
    features: &RecordFeatures,
    step_number: u32,
) -> (VerdictKey, AuditStep) {
    let decided = decide(features);
    let step = decided.audit_step(step_number, features, serde_json::Value::Null);
    (decided.outcome, step)
}

/// Classifies a record into one of the fourteen legacy verdicts.
///
/// # Example
///
/// ```
/// use activity_engine::classification::legacy_verdict;
/// use activity_engine::config::EngineConfig;
/// use activity_engine::models::{ActivityRecord, VerdictKey};
///
/// let mut record = ActivityRecord::new("Anna");
/// record.is_project = Some(true);
///
/// assert_eq!(legacy_verdict(&record, &EngineConfig::default()), VerdictKey::ProjectInactive);
/// ```
pub fn legacy_verdict(record: &ActivityRecord, config: &EngineConfig) -> VerdictKey {
    legacy_verdict_for(&extract_features(record, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NumericField, ReportStatus, WorkTrack};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn features(crm: &str, discord: &str, target: Option<&str>, report: bool) -> RecordFeatures {
        RecordFeatures {
            crm_hours: dec(crm),
            discord_hours: dec(discord),
            total_hours: dec(crm) + dec(discord),
            target: match target {
                Some(t) => HourTarget::Required(dec(t)),
                None => HourTarget::NoRequirement,
            },
            report: if report {
                ReportStatus::Valid
            } else {
                ReportStatus::Empty
            },
            leave: LeaveStatus::NoLeave,
            track: WorkTrack::Standard,
        }
    }

    #[test]
    fn test_full_leave() {
        let mut f = features("0", "0", Some("8"), false);
        f.leave = LeaveStatus::FullLeave;
        assert_eq!(legacy_verdict_for(&f), VerdictKey::Leave);
    }

    #[test]
    fn test_half_day_is_distinct_from_leave() {
        let mut f = features("2", "2", Some("8"), true);
        f.leave = LeaveStatus::HalfDay;
        assert_eq!(legacy_verdict_for(&f), VerdictKey::HalfDay);
    }

    #[test]
    fn test_idle_project_record() {
        let mut f = features("0", "0", Some("8"), true);
        f.track = WorkTrack::Project;
        assert_eq!(legacy_verdict_for(&f), VerdictKey::ProjectInactive);
    }

    #[test]
    fn test_active_project_record_skips_hour_checks() {
        let mut f = features("1", "0", Some("8"), false);
        f.track = WorkTrack::Project;
        assert_eq!(legacy_verdict_for(&f), VerdictKey::Project);
    }

    #[test]
    fn test_leave_beats_project() {
        let mut f = features("0", "0", None, false);
        f.track = WorkTrack::Project;
        f.leave = LeaveStatus::FullLeave;
        assert_eq!(legacy_verdict_for(&f), VerdictKey::Leave);
    }

    #[test]
    fn test_inactive() {
        assert_eq!(
            legacy_verdict_for(&features("0", "0", Some("8"), true)),
            VerdictKey::Inactive
        );
    }

    #[test]
    fn test_no_crm_and_no_discord() {
        assert_eq!(
            legacy_verdict_for(&features("0", "9", Some("8"), true)),
            VerdictKey::NoCrm
        );
        assert_eq!(
            legacy_verdict_for(&features("9", "0", Some("8"), true)),
            VerdictKey::NoDiscord
        );
    }

    #[test]
    fn test_low_channels() {
        assert_eq!(
            legacy_verdict_for(&features("3", "3", Some("8"), true)),
            VerdictKey::LowBoth
        );
        assert_eq!(
            legacy_verdict_for(&features("2", "5", Some("8"), true)),
            VerdictKey::LowCrm
        );
        assert_eq!(
            legacy_verdict_for(&features("5", "2", Some("8"), true)),
            VerdictKey::LowDiscord
        );
    }

    #[test]
    fn test_uneven_split_meeting_target_is_not_low() {
        assert_eq!(
            legacy_verdict_for(&features("7", "1", Some("8"), true)),
            VerdictKey::Ok
        );
    }

    #[test]
    fn test_no_report() {
        assert_eq!(
            legacy_verdict_for(&features("4", "4", Some("8"), false)),
            VerdictKey::NoReport
        );
    }

    #[test]
    fn test_work_without_target() {
        assert_eq!(
            legacy_verdict_for(&features("4", "4", None, true)),
            VerdictKey::Work
        );
    }

    #[test]
    fn test_check_is_fallback() {
        let rules = &LEGACY_RULES[..2];
        let decided = evaluate(rules, &features("4", "4", Some("8"), true), &LEGACY_FALLBACK);
        assert_eq!(decided.outcome, VerdictKey::Check);
    }

    #[test]
    fn test_legacy_and_unified_can_disagree() {
        let config = EngineConfig::default();
        let mut record = ActivityRecord::new("Anna");
        record.crm_time = Some(NumericField::from("0"));
        record.discord_time = Some(NumericField::from("9"));
        record.rate = Some(NumericField::Number(1.0));

        assert_eq!(legacy_verdict(&record, &config), VerdictKey::NoCrm);
        assert_eq!(
            crate::classification::classify(&record, crate::models::ActiveTab::Company, &config),
            crate::models::UnifiedStatus::TotalProblems
        );
    }

    #[test]
    fn test_audit_step() {
        let (verdict, step) = legacy_verdict_audited(&features("3", "3", Some("8"), true), 3);
        assert_eq!(verdict, VerdictKey::LowBoth);
        assert_eq!(step.rule_id, "legacy_low_both");
        assert_eq!(step.output["outcome"], "low-both");
        assert_eq!(step.step_number, 3);
    }
}
