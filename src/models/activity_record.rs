//! Activity record model and related types.
//!
//! This module defines the [`ActivityRecord`] struct, one employee's activity
//! for one day as supplied by the upstream data source, and the
//! [`NumericField`] type used for the loosely typed numeric columns.

use serde::{Deserialize, Deserializer, Serialize};
use serde::de::IgnoredAny;

/// A numeric column that upstream sources deliver either as a JSON number or
/// as free text (e.g. `"7,5"`, `"n/a"`).
///
/// Interpretation is deferred to the extractors in
/// [`crate::classification`], which never fail on malformed input.
///
/// # Example
///
/// ```
/// use activity_engine::models::NumericField;
///
/// let from_number: NumericField = serde_json::from_str("7.5").unwrap();
/// let from_text: NumericField = serde_json::from_str("\"7,5\"").unwrap();
/// assert_eq!(from_number, NumericField::Number(7.5));
/// assert_eq!(from_text, NumericField::Text("7,5".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    /// A value delivered as a JSON number.
    Number(f64),
    /// A value delivered as a string.
    Text(String),
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// One employee's activity for one calendar day.
///
/// An employee may have several records for the same day. Only `name` is
/// required; every other field may be missing or malformed without
/// preventing classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Display name of the employee.
    pub name: String,
    /// Discord account id, the preferred grouping key when present.
    ///
    /// Accepted as a string or a JSON number.
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub discord_id: Option<String>,
    /// Department label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Profession label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    /// Voice/call time in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_time: Option<NumericField>,
    /// CRM time in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm_time: Option<NumericField>,
    /// Free-text CRM annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm_status: Option<String>,
    /// Free-text daily report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    /// Free-text leave marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave: Option<String>,
    /// Leave fraction for the day (1 = full day).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_rate: Option<NumericField>,
    /// Pay-rate multiplier driving the daily hour target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<NumericField>,
    /// Employment status text; may mention a project track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_status: Option<String>,
    /// Alternative status column consulted when `employee_status` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
    /// Explicit project-track flag.
    ///
    /// Accepted as a boolean, `0`/`1`, or text such as `"TRUE"`; anything
    /// else is treated as absent.
    #[serde(
        default,
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_project: Option<bool>,
    /// Precomputed CRM hours overriding `crm_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_hours: Option<NumericField>,
    /// Precomputed daily target overriding rate resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_time: Option<NumericField>,
    /// Calendar day of the record, as text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ActivityRecord {
    /// Creates a record for the named employee with every other field empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the trimmed Discord id, or `None` when it is missing or blank.
    ///
    /// # Example
    ///
    /// ```
    /// use activity_engine::models::ActivityRecord;
    ///
    /// let mut record = ActivityRecord::new("Anna");
    /// record.discord_id = Some("  ".to_string());
    /// assert_eq!(record.discord_id(), None);
    ///
    /// record.discord_id = Some(" 4711 ".to_string());
    /// assert_eq!(record.discord_id(), Some("4711"));
    /// ```
    pub fn discord_id(&self) -> Option<&str> {
        non_blank(self.discord_id.as_deref())
    }

    /// Returns the status text used for project detection: `employee_status`
    /// when non-empty, otherwise `current_status`.
    pub fn status_text(&self) -> Option<&str> {
        non_blank(self.employee_status.as_deref()).or(non_blank(self.current_status.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Other(IgnoredAny),
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => Some(text),
        Some(RawId::Unsigned(n)) => Some(n.to_string()),
        Some(RawId::Signed(n)) => Some(n.to_string()),
        Some(RawId::Float(n)) if n.is_finite() && n.fract() == 0.0 => Some(format!("{:.0}", n)),
        Some(RawId::Float(_)) | Some(RawId::Other(_)) | None => None,
    };
    Ok(id)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Flag(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<RawFlag>::deserialize(deserializer)? {
        Some(RawFlag::Flag(flag)) => Some(flag),
        Some(RawFlag::Number(n)) if n == 1.0 => Some(true),
        Some(RawFlag::Number(n)) if n == 0.0 => Some(false),
        Some(RawFlag::Text(text)) => match text.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    };
    Ok(flag)
}
