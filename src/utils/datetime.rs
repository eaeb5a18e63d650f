//! Date and time utility functions
//!
//! Todos carry a creation timestamp that is only used for display. This module
//! turns it into a short, human-readable stamp ("just now", "5m ago",
//! "14:02", "yesterday 09:15", "2025-01-15").

use chrono::{DateTime, Local};

/// Default date format for todos older than yesterday
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default time format for todos created today or yesterday
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Format a creation time relative to `now`
///
/// # Arguments
/// * `created_at` - When the todo was created
/// * `now` - Reference time, usually `Local::now()`
/// * `time_format` - strftime format for same-day and yesterday stamps
/// * `date_format` - strftime format for anything older
pub fn format_created_at(
    created_at: DateTime<Local>,
    now: DateTime<Local>,
    time_format: &str,
    date_format: &str,
) -> String {
    let elapsed = now.signed_duration_since(created_at);

    // Clock skew or a future timestamp: show the time rather than a negative age
    if elapsed.num_seconds() < 0 {
        return created_at.format(time_format).to_string();
    }

    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return format!("{}m ago", elapsed.num_minutes());
    }

    let days_diff = (now.date_naive() - created_at.date_naive()).num_days();
    match days_diff {
        0 => created_at.format(time_format).to_string(),
        1 => format!("yesterday {}", created_at.format(time_format)),
        _ => created_at.format(date_format).to_string(),
    }
}

/// Format a creation time relative to the current local time
pub fn format_created_at_now(created_at: DateTime<Local>, time_format: &str, date_format: &str) -> String {
    format_created_at(created_at, Local::now(), time_format, date_format)
}
