//! Classification outcome enums.
//!
//! [`UnifiedStatus`] is the seven-state status used by current consumers.
//! [`VerdictKey`] is the older fourteen-state verdict kept for compatibility;
//! the two are produced by independent rule tables and need not agree.

use serde::{Deserialize, Serialize};

/// The dashboard tab a record is viewed under.
///
/// Project-track employees are exempt from the hours requirement only on the
/// project tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    /// Company-wide view; every record is held to the hours rules.
    #[default]
    Company,
    /// Project view; project-track records are judged on their report only.
    Project,
}

/// Seven-state daily status.
///
/// # Example
///
/// ```
/// use activity_engine::models::UnifiedStatus;
///
/// assert_eq!(
///     serde_json::to_string(&UnifiedStatus::HoursProblems).unwrap(),
///     "\"hoursProblems\""
/// );
/// assert_eq!(UnifiedStatus::TotalProblems.to_string(), "totalProblems");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnifiedStatus {
    /// Hours and report requirements met.
    Ok,
    /// Hours below target, report fine.
    HoursProblems,
    /// Hours fine, report missing or too short.
    ReportProblems,
    /// Both hours and report problems, or one channel entirely missing.
    TotalProblems,
    /// No activity on either channel.
    Inactive,
    /// Full or half day of leave.
    Leave,
    /// Project-track placeholder; ranks lowest when resolving the worst status.
    Project,
}

impl UnifiedStatus {
    /// Every status, in declaration order.
    pub const ALL: [UnifiedStatus; 7] = [
        UnifiedStatus::Ok,
        UnifiedStatus::HoursProblems,
        UnifiedStatus::ReportProblems,
        UnifiedStatus::TotalProblems,
        UnifiedStatus::Inactive,
        UnifiedStatus::Leave,
        UnifiedStatus::Project,
    ];

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnifiedStatus::Ok => "ok",
            UnifiedStatus::HoursProblems => "hoursProblems",
            UnifiedStatus::ReportProblems => "reportProblems",
            UnifiedStatus::TotalProblems => "totalProblems",
            UnifiedStatus::Inactive => "inactive",
            UnifiedStatus::Leave => "leave",
            UnifiedStatus::Project => "project",
        }
    }
}

impl std::fmt::Display for UnifiedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fourteen-state legacy verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerdictKey {
    /// Target met on both channels with a valid report.
    Ok,
    /// Active with a valid report but no target to measure against.
    Work,
    /// Full day of leave.
    Leave,
    /// Partial day of leave.
    HalfDay,
    /// Project-track employee with activity.
    Project,
    /// No CRM time recorded.
    NoCrm,
    /// No voice/call time recorded.
    NoDiscord,
    /// CRM time below target.
    LowCrm,
    /// Voice/call time below target.
    LowDiscord,
    /// Both channels below target.
    LowBoth,
    /// Report missing or too short.
    NoReport,
    /// No rule matched; needs a manual look.
    Check,
    /// No activity on either channel.
    Inactive,
    /// Project-track employee with no activity.
    ProjectInactive,
}

impl VerdictKey {
    /// Returns the wire name of the verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKey::Ok => "ok",
            VerdictKey::Work => "work",
            VerdictKey::Leave => "leave",
            VerdictKey::HalfDay => "half-day",
            VerdictKey::Project => "project",
            VerdictKey::NoCrm => "no-crm",
            VerdictKey::NoDiscord => "no-discord",
            VerdictKey::LowCrm => "low-crm",
            VerdictKey::LowDiscord => "low-discord",
            VerdictKey::LowBoth => "low-both",
            VerdictKey::NoReport => "no-report",
            VerdictKey::Check => "check",
            VerdictKey::Inactive => "inactive",
            VerdictKey::ProjectInactive => "project-inactive",
        }
    }
}

impl std::fmt::Display for VerdictKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
