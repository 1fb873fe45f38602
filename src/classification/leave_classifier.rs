//! Leave detection from the leave-rate field.

use rust_decimal::Decimal;

use crate::models::{LeaveStatus, NumericField};

use super::time_aggregator::parse_hours;

/// Derives the leave status from a leave rate.
///
/// The rate is parsed like an hour value. A rate of 1 or more is a full day
/// of leave, a rate strictly between 0 and 1 is a half day, anything else is
/// no leave. The free-text `leave` column is not consulted.
///
/// # Example
///
/// ```
/// use activity_engine::classification::classify_leave;
/// use activity_engine::models::{LeaveStatus, NumericField};
///
/// assert_eq!(classify_leave(Some(&NumericField::from("1"))), LeaveStatus::FullLeave);
/// assert_eq!(classify_leave(Some(&NumericField::from("0,5"))), LeaveStatus::HalfDay);
/// assert_eq!(classify_leave(None), LeaveStatus::NoLeave);
/// ```
pub fn classify_leave(leave_rate: Option<&NumericField>) -> LeaveStatus {
    let rate = parse_hours(leave_rate);

    if rate >= Decimal::ONE {
        LeaveStatus::FullLeave
    } else if rate > Decimal::ZERO {
        LeaveStatus::HalfDay
    } else {
        LeaveStatus::NoLeave
    }
}
