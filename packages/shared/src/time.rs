//! Time-related utilities.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to RFC 3339 in UTC.
///
/// Out-of-range values fall back to the Unix epoch.
pub fn millis_to_rfc3339(timestamp_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current local wall-clock time as `HH:MM:SS`, used by the client display.
pub fn local_clock() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
