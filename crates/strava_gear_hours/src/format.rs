//! Human-readable output for durations and activities.

use std::time::Duration;

use strava_client::{ActivitySummary, GearSummary};

/// Render a duration as `XhYmZs`, dropping leading zero units.
///
/// - 13530s -> `3h45m30s`
/// - 2700s -> `45m0s`
/// - 30s -> `30s`
/// - 0s -> `0s`
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{m}m{s}s")
    } else {
        format!("{s}s")
    }
}

pub fn format_activity(activity: &ActivitySummary) -> String {
    format!(
        "{}  {:>10}  {}",
        activity.start_date.format("%Y-%m-%d"),
        format_duration(Duration::from_secs(activity.moving_time)),
        activity.name
    )
}

/// Closing line: the gear, its lifetime distance in km and the moving time counted.
pub fn format_total(gear: &GearSummary, total: Duration) -> String {
    format!(
        "Total moving time for {} ({:.1} km on gear): {}",
        gear.name,
        gear.distance / 1000.0,
        format_duration(total)
    )
}
