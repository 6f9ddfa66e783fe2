//! Predicates that narrow an activity list.

use chrono::{DateTime, Utc};
use strava_client::{ActivitySummary, GearSummary};

/// One selection criterion. An activity survives when the predicate holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivityFilter {
    /// Recorded with the gear of this id.
    ByGear(String),
    /// Started at or after the cutoff. `None` keeps everything.
    BySince(Option<DateTime<Utc>>),
}

impl ActivityFilter {
    pub fn by_gear(gear: &GearSummary) -> Self {
        ActivityFilter::ByGear(gear.id.clone())
    }

    pub fn select(&self, activity: &ActivitySummary) -> bool {
        match self {
            ActivityFilter::ByGear(id) => activity.gear_id.as_deref() == Some(id.as_str()),
            ActivityFilter::BySince(None) => true,
            ActivityFilter::BySince(Some(cutoff)) => activity.start_date >= *cutoff,
        }
    }
}

/// Keep the activities that satisfy `filter`, preserving their order.
pub fn filter_activities(
    activities: Vec<ActivitySummary>,
    filter: &ActivityFilter,
) -> Vec<ActivitySummary> {
    activities.into_iter().filter(|a| filter.select(a)).collect()
}

/// Apply each filter in turn; later filters only see what earlier ones kept.
pub fn apply_filters(
    activities: Vec<ActivitySummary>,
    filters: &[ActivityFilter],
) -> Vec<ActivitySummary> {
    filters.iter().fold(activities, |acc, f| {
        let before = acc.len();
        let kept = filter_activities(acc, f);
        tracing::debug!(filter = ?f, before, after = kept.len(), "applied filter");
        kept
    })
}
