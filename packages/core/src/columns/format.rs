//! Human-readable value formatting helpers

use chrono::{DateTime, Utc};

/// Format the age of a record relative to `now`, in the coarsest unit that
/// applies. Days only show from two days up, so fresh records keep hour
/// resolution.
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created);
    let days = elapsed.num_hours() / 24;
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if days >= 2 {
        format!("{days}d")
    } else if hours > 0 {
        format!("{hours}h")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{}s", elapsed.num_seconds())
    }
}
