use std::time::Duration;

use strava_client::ActivitySummary;

/// Total moving time across `activities`. Empty input is zero.
pub fn sum_moving_time(activities: &[ActivitySummary]) -> Duration {
    Duration::from_secs(activities.iter().map(|a| a.moving_time).sum())
}
