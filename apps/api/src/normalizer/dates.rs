//! Date fields: calendar dates become "Month Year"; anything else is kept as typed.

use chrono::{DateTime, NaiveDate};

use crate::models::document::PRESENT;

/// Formats a calendar date (`2024-07-01`, `2024-07`, or an RFC 3339 timestamp) as "July 2024".
/// Other input (`2020`, `Spring 2021`) is returned trimmed and otherwise unchanged.
pub fn month_year(raw: &str) -> String {
    let raw = raw.trim();
    parse_calendar_date(raw)
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// End of a period. An ongoing period is always [`PRESENT`], whatever the raw field says.
pub fn end_date(raw: &str, ongoing: bool) -> String {
    if ongoing {
        PRESENT.to_string()
    } else {
        month_year(raw)
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
