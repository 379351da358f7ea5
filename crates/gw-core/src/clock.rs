//! Time display helpers.
//!
//! Pure functions of `(timestamp, now)` so callers can drive them from a
//! real clock, a ticking poller, or a fixed instant in tests.

use chrono::{DateTime, Utc};

/// Shift clock as `HH:MM:SS`. Hours keep counting past 24; a start time in
/// the future clamps to `00:00:00`.
#[must_use]
pub fn format_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let total = (now - start).num_seconds().max(0);
    format_hms(total.unsigned_abs())
}

/// `HH:MM:SS` for a whole number of seconds.
#[must_use]
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Length as `MM:SS`, for recordings and estimated absences.
#[must_use]
pub fn format_duration(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Coarse relative timestamp: `Just now`, `12m ago`, `3h ago`, `2d ago`.
#[must_use]
pub fn format_time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}
