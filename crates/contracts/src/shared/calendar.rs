//! Calendar-date strings (`YYYY-MM-DD`) as they travel in payloads.

use chrono::NaiveDate;

/// Format used for every date stored in a [`crate::domain::a001_customer::Customer`].
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date string.
///
/// Accepts non-padded months and days (`2024-1-5`) and ignores a trailing
/// time part (`2024-01-05T10:00:00Z`). Returns `None` for anything else.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, CALENDAR_DATE_FORMAT).ok()
}

/// Render a date as `YYYY-MM-DD`
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}
