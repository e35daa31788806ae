//! UTC day boundaries.
//!
//! Subgraph snapshots are keyed by the Unix timestamp of the UTC midnight
//! that opens their 24-hour period, so every query timestamp is truncated
//! to that boundary first.

use chrono::{DateTime, NaiveTime};

/// Length of one snapshot period in seconds.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Truncate a Unix timestamp (seconds) to the start of its UTC day.
///
/// Idempotent: a value that already sits on a boundary is returned as is.
/// Returns `None` when the day start is not representable as `i64`, which
/// only happens in the partial day just above `i64::MIN`.
pub fn start_of_utc_day(timestamp: i64) -> Option<i64> {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => Some(dt.date_naive().and_time(NaiveTime::MIN).and_utc().timestamp()),
        // Outside chrono's range; Unix time has no leap seconds so plain
        // arithmetic gives the same answer.
        None => timestamp.checked_sub(timestamp.rem_euclid(SECONDS_PER_DAY)),
    }
}

/// `YYYY-MM-DD` label of the UTC day containing `timestamp`, for logs.
pub fn day_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("day#{}", timestamp.div_euclid(SECONDS_PER_DAY)))
}
