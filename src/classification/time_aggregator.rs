//! Defensive hour parsing and time totals.
//!
//! Upstream time columns arrive as numbers, numeric strings with a comma
//! decimal separator, or garbage. Everything here degrades to zero instead of
//! failing, and sums saturate at the `Decimal` bounds instead of overflowing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{ActivityRecord, NumericField};

/// CRM, voice and total hours for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTotals {
    /// CRM hours, after the computed-hours override.
    pub crm_hours: Decimal,
    /// Voice/call hours.
    pub discord_hours: Decimal,
    /// CRM plus voice/call hours.
    pub total_hours: Decimal,
}

/// Parses an hour value, returning zero for anything unusable.
///
/// Numbers are used as-is unless non-finite. Text has its first comma
/// replaced by a dot and the longest leading decimal prefix is read, so
/// `"7,5h"` parses as 7.5 and `"n/a"` as 0.
///
/// # Example
///
/// ```
/// use activity_engine::classification::parse_hours;
/// use activity_engine::models::NumericField;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_hours(Some(&NumericField::from("7,5"))), Decimal::new(75, 1));
/// assert_eq!(parse_hours(Some(&NumericField::from(3.0))), Decimal::from(3));
/// assert_eq!(parse_hours(Some(&NumericField::from("n/a"))), Decimal::ZERO);
/// assert_eq!(parse_hours(None), Decimal::ZERO);
/// ```
pub fn parse_hours(value: Option<&NumericField>) -> Decimal {
    value.and_then(numeric_value).unwrap_or(Decimal::ZERO)
}

/// Interprets a numeric field, returning `None` when it holds no number.
pub fn numeric_value(value: &NumericField) -> Option<Decimal> {
    match value {
        NumericField::Number(n) => finite_decimal(*n),
        NumericField::Text(text) => parse_leading_decimal(text),
    }
}

/// Returns the CRM hours of a record.
///
/// A numeric `computed_hours` wins over the raw `crm_time` column; a textual
/// `computed_hours` is ignored.
pub fn crm_hours(record: &ActivityRecord) -> Decimal {
    match &record.computed_hours {
        Some(NumericField::Number(n)) => match finite_decimal(*n) {
            Some(hours) => hours,
            None => parse_hours(record.crm_time.as_ref()),
        },
        _ => parse_hours(record.crm_time.as_ref()),
    }
}

/// Returns the voice/call hours of a record.
pub fn discord_hours(record: &ActivityRecord) -> Decimal {
    parse_hours(record.discord_time.as_ref())
}

/// Computes CRM, voice and total hours for a record.
pub fn aggregate_time(record: &ActivityRecord) -> TimeTotals {
    let crm_hours = crm_hours(record);
    let discord_hours = discord_hours(record);

    TimeTotals {
        crm_hours,
        discord_hours,
        total_hours: crm_hours.saturating_add(discord_hours),
    }
}

fn finite_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::try_from(value).ok()
}

/// Reads the longest leading `[+-]digits[.digits]` prefix of `text`.
fn parse_leading_decimal(text: &str) -> Option<Decimal> {
    let normalized = text.trim().replacen(',', ".", 1);

    let mut sign = "";
    let mut int_part = String::new();
    let mut frac_part = String::new();
    let mut seen_dot = false;

    for (i, c) in normalized.chars().enumerate() {
        match c {
            '+' | '-' if i == 0 => {
                if c == '-' {
                    sign = "-";
                }
            }
            '0'..='9' if seen_dot => frac_part.push(c),
            '0'..='9' => int_part.push(c),
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if int_part.is_empty() {
        int_part.push('0');
    }

    let literal = if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    };

    Decimal::from_str(&literal).ok()
}
