//! Date parsing and range windowing.
//!
//! Weeks run Monday to Sunday. Months are calendar months. All bounds are
//! inclusive.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::{DateRange, DateWindow};

/// Parses the calendar day of a record date.
///
/// Accepts `YYYY-MM-DD`, ISO datetimes starting with a date
/// (`YYYY-MM-DDTHH:MM...` or a space separator), `DD.MM.YYYY` and
/// `MM/DD/YYYY`. Returns `None` for anything else.
///
/// # Example
///
/// ```
/// use activity_engine::classification::parse_record_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 1, 15);
/// assert_eq!(parse_record_date("2026-01-15"), expected);
/// assert_eq!(parse_record_date("2026-01-15T09:30:00Z"), expected);
/// assert_eq!(parse_record_date("15.01.2026"), expected);
/// assert_eq!(parse_record_date("01/15/2026"), expected);
/// assert_eq!(parse_record_date("yesterday"), None);
/// ```
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let (Some(day), Some(rest)) = (value.get(..10), value.get(10..)) {
        if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
            if let Ok(date) = NaiveDate::parse_from_str(day, "%Y-%m-%d") {
                return Some(date);
            }
        }
    }

    ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Resolves the inclusive window for a range around `anchor`.
///
/// Returns `None` for [`DateRange::All`], which applies no filtering.
///
/// # Example
///
/// ```
/// use activity_engine::classification::resolve_window;
/// use activity_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday
/// let anchor = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let week = resolve_window(DateRange::Week, anchor).unwrap();
///
/// assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(week.end_date, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// assert!(resolve_window(DateRange::All, anchor).is_none());
/// ```
pub fn resolve_window(range: DateRange, anchor: NaiveDate) -> Option<DateWindow> {
    match range {
        DateRange::Day => Some(DateWindow {
            start_date: anchor,
            end_date: anchor,
        }),
        DateRange::Week => {
            let offset = u64::from(anchor.weekday().num_days_from_monday());
            let start_date = anchor
                .checked_sub_days(Days::new(offset))
                .unwrap_or(NaiveDate::MIN);
            let end_date = start_date
                .checked_add_days(Days::new(6))
                .unwrap_or(NaiveDate::MAX);
            Some(DateWindow {
                start_date,
                end_date,
            })
        }
        DateRange::Month => {
            let start_date = anchor.with_day(1).unwrap_or(anchor);
            let end_date = start_date
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(NaiveDate::MAX);
            Some(DateWindow {
                start_date,
                end_date,
            })
        }
        DateRange::All => None,
    }
}

/// Returns true if a record dated `date` belongs in `window`.
///
/// Without a window every record belongs; with one, undated records are
/// excluded.
pub fn in_window(date: Option<NaiveDate>, window: Option<&DateWindow>) -> bool {
    match (window, date) {
        (None, _) => true,
        (Some(window), Some(date)) => window.contains_date(date),
        (Some(_), None) => false,
    }
}
