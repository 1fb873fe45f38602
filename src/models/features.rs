//! Extracted record features.
//!
//! Each classifier works on a [`RecordFeatures`] value rather than on the raw
//! record, so parsing happens once and both classifiers see identical inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The required daily hours for a record.
///
/// # Example
///
/// ```
/// use activity_engine::models::HourTarget;
/// use rust_decimal::Decimal;
///
/// let target = HourTarget::Required(Decimal::from(8));
/// assert!(target.is_met_by(Decimal::from(8)));
/// assert!(!target.is_met_by(Decimal::from(7)));
///
/// assert!(!HourTarget::NoRequirement.is_met_by(Decimal::from(12)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum HourTarget {
    /// A fixed number of hours is expected.
    Required(Decimal),
    /// No target could be resolved.
    NoRequirement,
}

impl HourTarget {
    /// Returns the target hours, if any.
    pub fn hours(&self) -> Option<Decimal> {
        match self {
            HourTarget::Required(hours) => Some(*hours),
            HourTarget::NoRequirement => None,
        }
    }

    /// Returns true if `hours` reaches a positive target.
    ///
    /// A missing or non-positive target can never be met.
    pub fn is_met_by(&self, hours: Decimal) -> bool {
        match self {
            HourTarget::Required(target) => *target > Decimal::ZERO && hours >= *target,
            HourTarget::NoRequirement => false,
        }
    }

    /// Returns true if `hours` falls short of the target.
    ///
    /// With no requirement the shortfall check fails closed: every value
    /// counts as short.
    pub fn is_missed_by(&self, hours: Decimal) -> bool {
        match self {
            HourTarget::Required(target) => hours < *target,
            HourTarget::NoRequirement => true,
        }
    }
}

/// Outcome of the daily report heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportStatus {
    /// Long enough to count as a report.
    Valid,
    /// Missing or whitespace only.
    Empty,
    /// Present but shorter than the configured minimum.
    TooShort {
        /// Trimmed length in characters.
        length: usize,
    },
}

impl ReportStatus {
    /// Returns true for [`ReportStatus::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ReportStatus::Valid)
    }
}

/// Leave derived from the leave-rate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Not on leave.
    NoLeave,
    /// Leave rate strictly between 0 and 1.
    HalfDay,
    /// Leave rate of 1 or more.
    FullLeave,
}

impl LeaveStatus {
    /// Returns true for half-day or full leave.
    pub fn is_on_leave(&self) -> bool {
        !matches!(self, LeaveStatus::NoLeave)
    }
}

/// The work track an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkTrack {
    /// Regular hours-based employee.
    Standard,
    /// Project-track employee.
    Project,
}

/// All signals the classifiers consume, extracted from one record (or
/// combined from several).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFeatures {
    /// CRM hours, after the computed-hours override.
    pub crm_hours: Decimal,
    /// Voice/call hours.
    pub discord_hours: Decimal,
    /// CRM plus voice/call hours.
    pub total_hours: Decimal,
    /// Required daily hours.
    pub target: HourTarget,
    /// Report heuristic outcome.
    pub report: ReportStatus,
    /// Leave derived from the leave rate.
    pub leave: LeaveStatus,
    /// Project or standard track.
    pub track: WorkTrack,
}

impl RecordFeatures {
    /// Returns true when the record belongs to the project track.
    pub fn is_project(&self) -> bool {
        self.track == WorkTrack::Project
    }

    /// Renders the features as audit input.
    pub fn audit_input(&self) -> serde_json::Value {
        serde_json::json!({
            "crm_hours": self.crm_hours.normalize().to_string(),
            "discord_hours": self.discord_hours.normalize().to_string(),
            "total_hours": self.total_hours.normalize().to_string(),
            "target_hours": self.target.hours().map(|h| h.normalize().to_string()),
            "report_valid": self.report.is_valid(),
            "leave": self.leave,
            "track": self.track,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_is_never_met() {
        let target = HourTarget::Required(Decimal::ZERO);
        assert!(!target.is_met_by(Decimal::from(5)));
        assert!(!target.is_missed_by(Decimal::from(5)));
    }

    #[test]
    fn test_no_requirement_is_always_missed() {
        assert!(HourTarget::NoRequirement.is_missed_by(Decimal::from(100)));
        assert_eq!(HourTarget::NoRequirement.hours(), None);
    }

    #[test]
    fn test_hour_target_serialization() {
        let json = serde_json::to_value(HourTarget::Required(Decimal::from(8))).unwrap();
        assert_eq!(json["kind"], "required");
        assert_eq!(json["hours"], "8");

        let json = serde_json::to_value(HourTarget::NoRequirement).unwrap();
        assert_eq!(json["kind"], "no_requirement");
    }

    #[test]
    fn test_report_status_validity() {
        assert!(ReportStatus::Valid.is_valid());
        assert!(!ReportStatus::Empty.is_valid());
        assert!(!ReportStatus::TooShort { length: 12 }.is_valid());
    }

    #[test]
    fn test_leave_status_on_leave() {
        assert!(LeaveStatus::FullLeave.is_on_leave());
        assert!(LeaveStatus::HalfDay.is_on_leave());
        assert!(!LeaveStatus::NoLeave.is_on_leave());
    }

    #[test]
    fn test_audit_input_normalizes_hours() {
        let features = RecordFeatures {
            crm_hours: Decimal::new(400, 2),
            discord_hours: Decimal::new(45, 1),
            total_hours: Decimal::new(850, 2),
            target: HourTarget::Required(Decimal::from(8)),
            report: ReportStatus::Valid,
            leave: LeaveStatus::NoLeave,
            track: WorkTrack::Standard,
        };
        let input = features.audit_input();
        assert_eq!(input["crm_hours"], "4");
        assert_eq!(input["discord_hours"], "4.5");
        assert_eq!(input["total_hours"], "8.5");
        assert_eq!(input["target_hours"], "8");
        assert_eq!(input["report_valid"], true);
        assert_eq!(input["track"], "standard");
    }
}
