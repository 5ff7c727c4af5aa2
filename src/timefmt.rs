//! Display formatting for backend timestamps.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

// e.g. "1/1/2025, 12:00:00 AM"
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Formats an ISO-8601 timestamp in the browser's local time zone.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Offset-less date-times are taken as wall-clock time in `tz` (the backend
/// sends `datetime.now()` without an offset); date-only values are UTC midnight.
pub fn format_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match parse_in(raw.trim(), tz) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}
