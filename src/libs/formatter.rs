//! Display formatting for task fields.
//!
//! Tables and exports show timestamps as `YYYY-MM-DD HH:MM:SS` and days as
//! `YYYY-MM-DD`. User input for completion times is parsed here as well.

use chrono::{NaiveDate, NaiveDateTime};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DAY_FORMAT: &str = "%Y-%m-%d";
pub const DONE_MARK: &str = "✓";

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Empty string when the task has not been completed.
pub fn format_optional_timestamp(timestamp: Option<&NaiveDateTime>) -> String {
    timestamp.map(format_timestamp).unwrap_or_default()
}

pub fn format_day(day: &NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn format_done(done: bool) -> &'static str {
    if done {
        DONE_MARK
    } else {
        ""
    }
}

/// Parses `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM`, ISO-8601 with `T`, or a bare
/// `YYYY-MM-DD` (taken as midnight).
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    const FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| NaiveDate::parse_from_str(input, DAY_FORMAT).ok().and_then(|day| day.and_hms_opt(0, 0, 0)))
}
