//! Worst-status resolution across one employee's records.
//!
//! When an employee has several records on the same day, the day is shown
//! with the most severe status among them. Severity uses its own ordering,
//! which is not the unified rule priority:
//!
//! | Rank | Status |
//! |------|--------|
//! | 1 | `leave` |
//! | 2 | `totalProblems` |
//! | 3 | `inactive` |
//! | 4 | `hoursProblems` |
//! | 5 | `reportProblems` |
//! | 6 | `ok` |
//! | 7 | `project` |
//!
//! A lower rank is worse and wins.

use crate::models::UnifiedStatus;

/// Returns the severity rank of a status; lower is worse.
pub fn severity_rank(status: UnifiedStatus) -> u8 {
    match status {
        UnifiedStatus::Leave => 1,
        UnifiedStatus::TotalProblems => 2,
        UnifiedStatus::Inactive => 3,
        UnifiedStatus::HoursProblems => 4,
        UnifiedStatus::ReportProblems => 5,
        UnifiedStatus::Ok => 6,
        UnifiedStatus::Project => 7,
    }
}

/// Picks the worst status, or `None` for an empty input.
///
/// Ties keep the first occurrence.
///
/// # Example
///
/// ```
/// use activity_engine::classification::worst_status;
/// use activity_engine::models::UnifiedStatus;
///
/// let statuses = [UnifiedStatus::Ok, UnifiedStatus::Inactive, UnifiedStatus::HoursProblems];
/// assert_eq!(worst_status(statuses), Some(UnifiedStatus::Inactive));
/// assert_eq!(worst_status([]), None);
/// ```
pub fn worst_status<I>(statuses: I) -> Option<UnifiedStatus>
where
    I: IntoIterator<Item = UnifiedStatus>,
{
    statuses
        .into_iter()
        .reduce(|worst, next| {
            if severity_rank(next) < severity_rank(worst) {
                next
            } else {
                worst
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_distinct_and_complete() {
        let mut ranks: Vec<u8> = UnifiedStatus::ALL.iter().map(|s| severity_rank(*s)).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_leave_beats_everything() {
        for status in UnifiedStatus::ALL {
            assert_eq!(
                worst_status([status, UnifiedStatus::Leave]),
                Some(UnifiedStatus::Leave)
            );
        }
    }

    #[test]
    fn test_total_problems_beats_inactive() {
        assert_eq!(
            worst_status([UnifiedStatus::Inactive, UnifiedStatus::TotalProblems]),
            Some(UnifiedStatus::TotalProblems)
        );
    }

    #[test]
    fn test_project_never_wins_over_another_status() {
        assert_eq!(
            worst_status([UnifiedStatus::Project, UnifiedStatus::Ok]),
            Some(UnifiedStatus::Ok)
        );
    }

    #[test]
    fn test_single_status() {
        assert_eq!(
            worst_status([UnifiedStatus::ReportProblems]),
            Some(UnifiedStatus::ReportProblems)
        );
    }

    #[test]
    fn test_order_independent() {
        let forward = [
            UnifiedStatus::Ok,
            UnifiedStatus::HoursProblems,
            UnifiedStatus::ReportProblems,
        ];
        let mut backward = forward;
        backward.reverse();
        assert_eq!(worst_status(forward), worst_status(backward));
        assert_eq!(worst_status(forward), Some(UnifiedStatus::HoursProblems));
    }
}
