//! Time utilities: local-to-UTC conversion and minute formatting.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Interpret a naive timestamp as local wall-clock time and convert to UTC.
/// Ambiguous local times (DST fall-back) resolve to the earlier instant;
/// nonexistent local times (DST gap) yield `None`.
pub fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Midnight of `date` in local time, converted to UTC.
pub fn midnight_to_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    local_to_utc(date.and_time(NaiveTime::MIN))
}

/// Format a minute count as `HH:MM`, keeping the sign.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
