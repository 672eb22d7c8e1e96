use crate::error::{AnalyticsError, Result};
use chrono::{DateTime, Utc};

/// Formats a study duration as whole hours and minutes
///
/// Examples:
/// - 0 seconds: "0m"
/// - 280 seconds: "4m"
/// - 4200 seconds: "1h 10m"
/// - 8640 seconds: "2h 24m"
///
/// Leftover seconds are dropped, never rounded up.
pub fn format_duration(total_seconds: i64) -> Result<String> {
    if total_seconds < 0 {
        return Err(AnalyticsError::InvalidDuration(total_seconds));
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    if hours > 0 {
        Ok(format!("{}h {}m", hours, minutes))
    } else {
        Ok(format!("{}m", minutes))
    }
}

/// Formats a past datetime relative to `now`
///
/// Examples:
/// - Now or in the future: "just now"
/// - 5 minutes earlier: "5 minutes ago"
/// - 1 hour earlier: "1 hour ago"
/// - 1 day earlier: "yesterday"
/// - 3 days earlier: "3 days ago"
/// - 30 or more days earlier: "on 2024-01-15"
pub fn format_time_since(now: DateTime<Utc>, past: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(past);

    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        let mins = elapsed.num_minutes();
        format!("{} minute{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if elapsed.num_hours() < 24 {
        let hours = elapsed.num_hours();
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if elapsed.num_days() == 1 {
        "yesterday".to_string()
    } else if elapsed.num_days() < 30 {
        format!("{} days ago", elapsed.num_days())
    } else {
        format!("on {}", past.format("%Y-%m-%d"))
    }
}
