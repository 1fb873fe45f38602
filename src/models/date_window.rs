//! Date range and window models.
//!
//! This module contains the [`DateRange`] selector and the inclusive
//! [`DateWindow`] it resolves to around an anchor date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The span of days an overview covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    /// Only the anchor day.
    #[default]
    Day,
    /// Monday through Sunday of the anchor's week.
    Week,
    /// The calendar month of the anchor.
    Month,
    /// Every record, no date filtering.
    All,
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::Day => write!(f, "day"),
            DateRange::Week => write!(f, "week"),
            DateRange::Month => write!(f, "month"),
            DateRange::All => write!(f, "all"),
        }
    }
}

/// An inclusive span of calendar days.
///
/// # Example
///
/// ```
/// use activity_engine::models::DateWindow;
/// use chrono::NaiveDate;
///
/// let window = DateWindow {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// };
///
/// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // start date
/// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())); // middle
/// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap())); // end date
/// assert!(!window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap())); // before
/// assert!(!window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day of the window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the window (inclusive).
    pub end_date: NaiveDate,
}

impl DateWindow {
    /// Checks if a given date falls within this window, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of days in the window.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
