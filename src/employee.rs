//! Employee records as returned by the directory API

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown for any missing field on a card
pub const PLACEHOLDER: &str = "-";

/// One employee from a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Backend row id. Decoded for completeness, never displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "deserialize_joining_date")]
    pub date_of_joining: Option<NaiveDate>,
}

impl Employee {
    pub fn department_label(&self) -> &str {
        label_or_placeholder(self.department.as_deref())
    }

    pub fn designation_label(&self) -> &str {
        label_or_placeholder(self.designation.as_deref())
    }

    /// Date of joining in the viewer's locale, or the placeholder when absent
    pub fn joining_date_label(&self, locale: Locale) -> String {
        match self.date_of_joining {
            Some(date) => format_date(date, locale),
            None => PLACEHOLDER.to_string(),
        }
    }
}

fn label_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Format a calendar date with the locale's preferred date representation (`%x`)
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%x", locale)
        .to_string()
}

/// Parse the date forms the backend may emit.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO date-times; only the
/// calendar date is kept.
pub fn parse_joining_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn deserialize_joining_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_joining_date(s).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid date_of_joining '{}'", s))
        }),
    }
}
