use chrono::{DateTime, Utc};

/// Human readable UTC rendering of an epoch-seconds timestamp, e.g.
/// "January 5, 2024 at 03:04 PM UTC". Missing or out-of-range timestamps
/// render as the epoch.
pub fn format_epoch(epoch_seconds: Option<i64>) -> String {
    let datetime = DateTime::<Utc>::from_timestamp(epoch_seconds.unwrap_or(0), 0)
        .unwrap_or(DateTime::UNIX_EPOCH);
    datetime.format("%B %-d, %Y at %I:%M %p UTC").to_string()
}

/// Explorer timestamps are decimal strings of epoch seconds
pub fn parse_epoch(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
