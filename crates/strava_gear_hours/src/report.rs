//! One end-to-end gear-hours query.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use strava_client::{ActivitySummary, GearSummary, StravaClient};

use crate::activities::{DEFAULT_PAGE_SIZE, list_all_activities};
use crate::aggregate::sum_moving_time;
use crate::error::GearHoursResult;
use crate::filter::{ActivityFilter, apply_filters};
use crate::gear::resolve_gear_by_name;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportQuery {
    pub gear_name: String,
    /// Earliest day to include, taken as midnight UTC. `None` means all time.
    pub since: Option<NaiveDate>,
    pub page_size: u32,
}

impl ReportQuery {
    pub fn new(gear_name: impl Into<String>) -> Self {
        Self {
            gear_name: gear_name.into(),
            since: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    fn cutoff(&self) -> Option<DateTime<Utc>> {
        self.since
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GearHoursReport {
    pub gear: GearSummary,
    pub activities: Vec<ActivitySummary>,
    pub total_moving_time: Duration,
}

/// Resolve the gear, list all activities, narrow them and total the moving time.
///
/// Fails on the first error from any stage.
pub async fn build_report<C>(client: &C, query: &ReportQuery) -> GearHoursResult<GearHoursReport>
where
    C: StravaClient + ?Sized,
{
    let gear = resolve_gear_by_name(client, &query.gear_name).await?;
    let activities = list_all_activities(client, query.page_size).await?;

    let filters = [
        ActivityFilter::by_gear(&gear),
        ActivityFilter::BySince(query.cutoff()),
    ];
    let activities = apply_filters(activities, &filters);
    let total_moving_time = sum_moving_time(&activities);

    Ok(GearHoursReport {
        gear,
        activities,
        total_moving_time,
    })
}
